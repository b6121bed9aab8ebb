#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn persona_key_is_the_documented_contract() {
    assert_eq!(PERSONA_STORAGE_KEY, "selectedPersona");
}

#[test]
fn load_returns_none_outside_the_browser() {
    assert!(load_string("anything").is_none());
}

#[test]
fn save_is_noop_but_callable() {
    save_string("k", "v");
    assert!(load_string("k").is_none());
}

#[test]
fn load_persona_returns_none_outside_the_browser() {
    assert!(load_persona().is_none());
}
