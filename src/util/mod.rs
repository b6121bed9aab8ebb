//! Utility helpers isolating browser and environment concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep web-sys glue out of component logic; each no-ops
//! outside the browser so native test builds stay deterministic.

pub mod clock;
pub mod haptics;
pub mod storage;
pub mod theme;
pub mod voice;
