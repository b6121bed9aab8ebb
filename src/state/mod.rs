//! Shared application state provided via Leptos context.
//!
//! ARCHITECTURE
//! ============
//! State types are plain data with pure transition methods; components own
//! `RwSignal`s over them and the view mirrors the state verbatim. Keeping the
//! send pipeline and rate-limit arithmetic out of the DOM layer makes both
//! testable without a browser.

pub mod chat;
pub mod rate;
pub mod ui;
