//! # rotochat
//!
//! Browser chat widget for a persona-driven, model-rotating chat endpoint,
//! built with Leptos and compiled to WebAssembly. The crate renders the
//! transcript, manages a dictation-capable composer with theme toggling,
//! and forwards messages to `POST /chat`, displaying each reply with the
//! model that produced it.
//!
//! Browser-only glue sits behind the `csr` feature; native builds no-op the
//! DOM layer so the state machines stay unit-testable.

pub mod app;
pub mod components;
pub mod net;
pub mod state;
pub mod util;
