//! Message composer: auto-resizing textarea, send button, voice dictation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the submit action of the send pipeline: rate-limit bookkeeping, the
//! optimistic echo of the user message, the typing indicator, and the
//! spawned `/chat` request. Overlapping sends are deliberately possible;
//! replies land in completion order.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api::{self, FETCH_ERROR_MESSAGE, application_error_message};
#[cfg(feature = "csr")]
use crate::net::types::ChatError;
use crate::net::types::ChatRequest;
use crate::state::chat::ChatState;
use crate::state::rate::RateLimiter;
use crate::state::ui::UiState;
use crate::util::{clock, haptics, voice};

/// Textarea growth cap.
#[cfg(feature = "csr")]
const MAX_INPUT_HEIGHT_PX: i32 = 120;

#[component]
pub fn Composer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let rate = expect_context::<RwSignal<RateLimiter>>();

    let input = RwSignal::new(String::new());
    let listening = RwSignal::new(false);
    let input_ref = NodeRef::<leptos::html::Textarea>::new();
    let voice_supported = voice::is_supported();

    // Focus on startup and again whenever the tab becomes visible.
    Effect::new(move || {
        focus_input(input_ref);

        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
                let on_visible = Closure::<dyn FnMut()>::new(move || {
                    let visible = web_sys::window().and_then(|w| w.document()).is_some_and(|d| !d.hidden());
                    if visible {
                        focus_input(input_ref);
                    }
                });
                let _ = doc.add_event_listener_with_callback("visibilitychange", on_visible.as_ref().unchecked_ref());
                on_visible.forget();
            }
        }
    });

    let do_send = move || {
        let message = input.get_untracked().trim().to_owned();
        if message.is_empty() {
            return;
        }
        haptics::tap();

        // Soft limit: the outcome never blocks the send, it only drives the
        // warning banner.
        let mut limiter = rate.get_untracked();
        let outcome = limiter.attempt(clock::now_ms());
        rate.set(limiter);
        ui.update(|u| u.rate_warning = outcome.warning);

        let persona = ui.get_untracked().persona.clone();
        chat.update(|c| {
            c.push_user(message.clone());
            c.typing = true;
        });
        input.set(String::new());
        resize_input(input_ref);

        let request = ChatRequest { message, persona };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = api::send_chat(&request).await;
            chat.update(|c| {
                c.typing = false;
                match result {
                    Ok(reply) => c.push_assistant(reply.reply, reply.model),
                    Err(ChatError::Application(error)) => {
                        c.push_assistant(application_error_message(&error), None);
                    }
                    Err(err @ ChatError::Transport(_)) => {
                        log::error!("chat request failed: {err}");
                        c.push_assistant(FETCH_ERROR_MESSAGE.to_owned(), None);
                    }
                }
            });
            focus_input(input_ref);
        });
        #[cfg(not(feature = "csr"))]
        let _ = request;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    // Enter sends, Shift+Enter inserts a newline.
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        input.set(event_target_value(&ev));
        resize_input(input_ref);
    };

    let on_voice = move |_| {
        haptics::tap();
        if listening.get_untracked() {
            return;
        }
        let started = voice::start(
            move |transcript| {
                input.set(transcript);
                resize_input(input_ref);

                #[cfg(feature = "csr")]
                leptos::task::spawn_local(async move {
                    let delay = std::time::Duration::from_millis(u64::from(voice::AUTO_SUBMIT_DELAY_MS));
                    gloo_timers::future::sleep(delay).await;
                    do_send();
                });
            },
            move || chat.update(|c| c.push_assistant(voice::VOICE_FALLBACK_MESSAGE.to_owned(), None)),
            move || listening.set(false),
        );
        listening.set(started);
    };

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <form class="composer" on:submit=on_submit>
            {voice_supported
                .then(|| {
                    view! {
                        <button
                            type="button"
                            class="composer__mic"
                            class:composer__mic--listening=move || listening.get()
                            aria-label="Voice input"
                            on:click=on_voice
                        >
                            "🎤"
                        </button>
                    }
                })}
            <textarea
                class="composer__input"
                placeholder="Type your message..."
                rows="1"
                node_ref=input_ref
                prop:value=move || input.get()
                on:input=on_input
                on:keydown=on_keydown
            ></textarea>
            <button class="composer__send" type="submit" disabled=move || !can_send()>
                "Send"
            </button>
        </form>
    }
}

fn focus_input(input_ref: NodeRef<leptos::html::Textarea>) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = input_ref.get() {
            let _ = el.focus();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input_ref;
    }
}

fn resize_input(input_ref: NodeRef<leptos::html::Textarea>) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = input_ref.get() {
            let style = el.style();
            let _ = style.set_property("height", "auto");
            let height = el.scroll_height().min(MAX_INPUT_HEIGHT_PX);
            let _ = style.set_property("height", &format!("{height}px"));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input_ref;
    }
}
