//! Networking modules for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema and the
//! error taxonomy shared with the UI.

pub mod api;
pub mod types;
