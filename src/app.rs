//! Root application component wiring shared state and the widget layout.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_panel::ChatPanel;
use crate::components::composer::Composer;
use crate::components::header_bar::HeaderBar;
use crate::components::rate_warning::RateWarning;
use crate::state::chat::ChatState;
use crate::state::rate::RateLimiter;
use crate::state::ui::{DEFAULT_PERSONA, UiState};
use crate::util::{storage, theme};

/// Root component. Restores persisted preferences, provides the shared
/// state contexts, and lays out the widget.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let restored_theme = theme::read_preference();
    theme::apply(restored_theme);

    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState {
        theme: restored_theme,
        persona: storage::load_persona().unwrap_or_else(|| DEFAULT_PERSONA.to_owned()),
        rate_warning: false,
    });
    let rate = RwSignal::new(RateLimiter::default());

    provide_context(chat);
    provide_context(ui);
    provide_context(rate);

    view! {
        <Title text="RotoChat"/>

        <div class="chat-app">
            <HeaderBar/>
            <RateWarning/>
            <ChatPanel/>
            <Composer/>
        </div>
    }
}
