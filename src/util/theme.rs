//! Theme initialization and toggle.
//!
//! Reads the preferred theme from localStorage and applies it as a
//! `data-theme` attribute on the `<html>` element. Toggle writes back to
//! localStorage and updates the attribute. Requires a browser environment;
//! native builds no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;
use crate::util::storage;

/// localStorage key holding the persisted theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Read the persisted theme, defaulting to light.
#[must_use]
pub fn read_preference() -> Theme {
    storage::load_string(THEME_STORAGE_KEY)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.flipped();
    apply(next);
    storage::save_string(THEME_STORAGE_KEY, next.as_str());
    next
}
