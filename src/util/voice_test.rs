#![cfg(not(feature = "csr"))]

use std::cell::Cell;
use std::rc::Rc;

use super::*;

#[test]
fn recognition_is_unsupported_outside_the_browser() {
    assert!(!is_supported());
}

#[test]
fn start_reports_failure_without_invoking_callbacks() {
    let fired = Rc::new(Cell::new(false));
    let (a, b, c) = (fired.clone(), fired.clone(), fired.clone());

    let started = start(move |_| a.set(true), move || b.set(true), move || c.set(true));
    assert!(!started);
    assert!(!fired.get());
}

#[test]
fn dictation_language_is_fixed() {
    assert_eq!(VOICE_LANG, "en-US");
}
