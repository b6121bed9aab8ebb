//! Wire schema for the chat endpoint plus the client error taxonomy.
//!
//! The endpoint speaks one request/response shape: `POST /chat` takes
//! `{ message, persona }` and answers `{ reply, model }` on success or
//! `{ error }` on failure. Failures travel in-band, so response parsing
//! collapses every payload into a usable reply or a `ChatError`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Fallback for error payloads that omit a usable message.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Body for `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub persona: String,
}

/// A usable reply and the model that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
    pub model: Option<String>,
}

/// Raw `POST /chat` response body.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub reply: Option<String>,
    pub model: Option<String>,
    pub error: Option<String>,
}

impl ChatResponse {
    /// Collapse the payload into a reply or an application error.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Application`] when the payload carries no reply,
    /// with the in-band `error` string when present.
    pub fn into_reply(self) -> Result<ChatReply, ChatError> {
        match self.reply {
            Some(reply) => Ok(ChatReply { reply, model: self.model }),
            None => Err(ChatError::Application(
                self.error.unwrap_or_else(|| UNKNOWN_ERROR.to_owned()),
            )),
        }
    }
}

/// Failures surfaced to the transcript in place of a reply.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The call could not complete (request build or network failure).
    #[error("transport failure: {0}")]
    Transport(String),
    /// The call completed but the payload lacked a usable reply.
    #[error("{0}")]
    Application(String),
}
