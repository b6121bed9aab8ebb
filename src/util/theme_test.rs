#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn storage_key_is_the_documented_contract() {
    assert_eq!(THEME_STORAGE_KEY, "theme");
}

#[test]
fn read_preference_defaults_to_light_without_storage() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn toggle_flips_and_returns_the_next_theme() {
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    assert_eq!(toggle(Theme::Dark), Theme::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
