//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the widget chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod chat_panel;
pub mod composer;
pub mod header_bar;
pub mod rate_warning;
