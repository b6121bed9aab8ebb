//! Header bar: persona selection, model label, theme toggle, clear chat.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api::{self, CLEAR_ERROR_MESSAGE};
use crate::state::chat::ChatState;
use crate::state::rate::RateLimiter;
use crate::state::ui::{PERSONAS, UiState};
use crate::util::{haptics, storage, theme};

#[component]
pub fn HeaderBar() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let rate = expect_context::<RwSignal<RateLimiter>>();

    let on_persona_change = move |ev: leptos::ev::Event| {
        haptics::tap();
        let persona = event_target_value(&ev);
        storage::save_persona(&persona);
        ui.update(|u| u.persona = persona);
    };

    let on_theme_toggle = move |_| {
        haptics::tap();
        ui.update(|u| u.theme = theme::toggle(u.theme));
    };

    // The transcript and counters reset regardless of how the server call
    // goes; a failure only appends an advisory entry afterwards.
    let on_clear = move |_| {
        haptics::tap();
        chat.update(ChatState::clear);
        rate.set(RateLimiter::default());
        ui.update(|u| u.rate_warning = false);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(err) = api::clear_chat().await {
                log::error!("clear request failed: {err}");
                chat.update(|c| c.push_assistant(CLEAR_ERROR_MESSAGE.to_owned(), None));
            }
        });
    };

    view! {
        <header class="header">
            <h1 class="header__title">"RotoChat"</h1>
            <div class="header__model" aria-live="polite">{move || chat.get().model_label_text()}</div>
            <div class="header__controls">
                <select class="header__persona" aria-label="Persona" on:change=on_persona_change>
                    {PERSONAS
                        .iter()
                        .map(|p| {
                            let id = p.id;
                            view! {
                                <option value=id selected=move || ui.get().persona == id>
                                    {p.name}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <button class="header__button" aria-label="Toggle theme" on:click=on_theme_toggle>
                    {move || ui.get().theme.toggle_glyph()}
                </button>
                <button class="header__button header__button--clear" aria-label="Clear chat" on:click=on_clear>
                    "Clear"
                </button>
            </div>
        </header>
    }
}
