//! Chat transcript state: an append-only message list plus reply bookkeeping.
//!
//! DESIGN
//! ======
//! Entries are never mutated once appended; overlapping sends append their
//! replies in whatever order they complete. `clear` restores the seeded
//! welcome message and drops all other bookkeeping, matching a fresh session.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Greeting seeded into every fresh (or cleared) transcript.
pub const WELCOME_TEXT: &str = "Hey! Pick a persona and ask me anything.";

/// Header label shown before any model has replied.
pub const MODEL_LABEL_PLACEHOLDER: &str = "Model: Rotating...";

/// Author of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// CSS modifier for this role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    /// Single-letter avatar glyph rendered next to the message.
    #[must_use]
    pub fn avatar_glyph(self) -> &'static str {
        match self {
            Self::User => "Y",
            Self::Assistant => "R",
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    /// Model that produced an assistant reply; `None` for user messages and
    /// for error text rendered in place of a reply.
    pub model: Option<String>,
}

/// Transcript plus reply-in-flight bookkeeping, shared via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    /// Typing indicator visibility; raised on send, dismissed on completion.
    pub typing: bool,
    /// Model id from the most recent successful reply.
    pub model_label: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            messages: vec![Self::welcome()],
            typing: false,
            model_label: None,
        }
    }
}

impl ChatState {
    fn welcome() -> ChatMessage {
        ChatMessage {
            role: Role::Assistant,
            text: WELCOME_TEXT.to_owned(),
            model: None,
        }
    }

    /// Append a user-authored entry.
    pub fn push_user(&mut self, text: String) {
        self.messages.push(ChatMessage {
            role: Role::User,
            text,
            model: None,
        });
    }

    /// Append an assistant-side entry. A present model id also refreshes the
    /// header label; error text rendered in place of a reply passes `None`.
    pub fn push_assistant(&mut self, text: String, model: Option<String>) {
        if let Some(model) = &model {
            self.model_label = Some(model.clone());
        }
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            text,
            model,
        });
    }

    /// Header model label, falling back to the rotating placeholder.
    #[must_use]
    pub fn model_label_text(&self) -> String {
        self.model_label
            .as_deref()
            .map_or_else(|| MODEL_LABEL_PLACEHOLDER.to_owned(), |m| format!("Model: {m}"))
    }

    /// Drop everything except the welcome message and reset bookkeeping.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
