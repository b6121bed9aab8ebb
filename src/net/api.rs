//! HTTP calls to the chat endpoint.
//!
//! Browser builds (`csr`): real calls via `gloo-net`. Native builds: stubs
//! returning transport errors so callers degrade without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and application failures both surface as `ChatError`; callers
//! render them into the transcript rather than panicking. Status codes are
//! not inspected: the endpoint reports failures in-band.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatError, ChatReply, ChatRequest};
#[cfg(feature = "csr")]
use super::types::ChatResponse;

/// Chat completion endpoint.
pub const CHAT_ENDPOINT: &str = "/chat";
/// Server-side history reset endpoint.
pub const CLEAR_ENDPOINT: &str = "/clear";

/// Transcript text rendered when the chat call fails in transport.
pub const FETCH_ERROR_MESSAGE: &str = "Error: Failed to fetch response. Please try again.";
/// Transcript text rendered when the clear call fails.
pub const CLEAR_ERROR_MESSAGE: &str = "Error: Failed to clear chat. Please refresh the page.";

/// Format an in-band error payload for the transcript.
#[must_use]
pub fn application_error_message(error: &str) -> String {
    format!("Error: {error}")
}

/// Send a chat message via `POST /chat` and await the reply.
///
/// # Errors
///
/// [`ChatError::Transport`] when the request cannot complete,
/// [`ChatError::Application`] when the payload lacks a usable reply.
pub async fn send_chat(request: &ChatRequest) -> Result<ChatReply, ChatError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(request)
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        let body: ChatResponse = resp
            .json()
            .await
            .map_err(|e| ChatError::Application(format!("malformed response: {e}")))?;
        body.into_reply()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ChatError::Transport("not available outside the browser".to_owned()))
    }
}

/// Reset server-side conversation memory via `POST /clear`. Fire-and-forget:
/// the caller clears the visible transcript regardless of the outcome.
///
/// # Errors
///
/// [`ChatError::Transport`] when the request cannot complete.
pub async fn clear_chat() -> Result<(), ChatError> {
    #[cfg(feature = "csr")]
    {
        gloo_net::http::Request::post(CLEAR_ENDPOINT)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| ChatError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ChatError::Transport("not available outside the browser".to_owned()))
    }
}
