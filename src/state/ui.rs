//! UI preference state: theme, persona selection, rate warning visibility.
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of transcript state (`chat`) so the
//! header controls can evolve independently of message data. Theme and
//! persona survive reloads via localStorage (see `util::theme` and
//! `util::storage`); the rate warning flag is session-only.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Color theme applied via the `data-theme` attribute on `<html>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Storage and attribute value for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value; anything unrecognized is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle button for the current theme.
    #[must_use]
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }
}

/// A selectable assistant persona.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Persona {
    pub id: &'static str,
    pub name: &'static str,
}

/// Personas offered by the remote endpoint.
pub const PERSONAS: [Persona; 3] = [
    Persona { id: "nonchalant", name: "Nonchalant" },
    Persona { id: "chalant", name: "Chalant" },
    Persona { id: "gemini", name: "Gemini-Type" },
];

/// Persona preselected for new sessions.
pub const DEFAULT_PERSONA: &str = "nonchalant";

/// Whether `id` is one of the offered personas.
#[must_use]
pub fn is_offered_persona(id: &str) -> bool {
    PERSONAS.iter().any(|p| p.id == id)
}

/// UI preference state shared via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub persona: String,
    /// Burst warning banner visibility, driven by the rate limiter.
    pub rate_warning: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            persona: DEFAULT_PERSONA.to_owned(),
            rate_warning: false,
        }
    }
}
