//! Browser localStorage helpers for preference persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes browser-only read/write behavior so preference code does not
//! repeat web-sys glue. Native builds read nothing and write nowhere.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::ui::is_offered_persona;

/// localStorage key holding the persisted persona id.
pub const PERSONA_STORAGE_KEY: &str = "selectedPersona";

/// Load a raw string from localStorage.
#[must_use]
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = key;
        None
    }
}

/// Save a raw string to localStorage.
pub fn save_string(key: &str, value: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (key, value);
    }
}

/// Restore the persisted persona, dropping ids no longer offered.
#[must_use]
pub fn load_persona() -> Option<String> {
    load_string(PERSONA_STORAGE_KEY).filter(|id| is_offered_persona(id))
}

/// Persist the selected persona id.
pub fn save_persona(id: &str) {
    save_string(PERSONA_STORAGE_KEY, id);
}
