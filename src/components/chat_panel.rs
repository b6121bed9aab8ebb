//! Transcript panel: message history plus the typing indicator.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState};

/// Transcript renderer. Scrolls to the newest entry on every change. No
/// virtualization: the list grows for the lifetime of the session.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.typing;

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    view! {
        <div class="chat-panel" node_ref=messages_ref>
            {move || chat.get().messages.iter().map(message_view).collect::<Vec<_>>()}
            <Show when=move || chat.get().typing>
                <div class="chat-panel__typing" aria-live="polite">
                    <span class="chat-panel__typing-dot"></span>
                    <span class="chat-panel__typing-dot"></span>
                    <span class="chat-panel__typing-dot"></span>
                </div>
            </Show>
        </div>
    }
}

fn message_view(message: &ChatMessage) -> impl IntoView + use<> {
    let role = message.role;
    let text = message.text.clone();
    let model = message.model.clone();

    view! {
        <div class=format!("message message--{}", role.as_str())>
            <div class="message__avatar">{role.avatar_glyph()}</div>
            <div class="message__content">
                <span class="message__text">{text}</span>
                {model.map(|m| view! { <div class="message__model">{format!("Model: {m}")}</div> })}
            </div>
        </div>
    }
}
