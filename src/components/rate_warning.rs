//! Soft rate-limit warning banner.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Banner text shown once a burst reaches the warning ceiling.
pub const RATE_WARNING_TEXT: &str = "You're sending messages too quickly. Please slow down.";

/// Non-blocking warning banner driven by the rate limiter.
#[component]
pub fn RateWarning() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().rate_warning>
            <div class="rate-warning" role="status">{RATE_WARNING_TEXT}</div>
        </Show>
    }
}
