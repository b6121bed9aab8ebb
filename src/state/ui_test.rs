use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_defaults_to_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_round_trips_through_its_storage_value() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn theme_parse_rejects_unknown_values() {
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("auto"), None);
    assert_eq!(Theme::parse("Dark"), None);
}

#[test]
fn theme_flip_alternates() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
}

#[test]
fn toggle_glyph_offers_the_way_back() {
    assert_eq!(Theme::Dark.toggle_glyph(), "☀️");
    assert_eq!(Theme::Light.toggle_glyph(), "🌙");
}

// =============================================================
// Personas
// =============================================================

#[test]
fn default_persona_is_offered() {
    assert!(is_offered_persona(DEFAULT_PERSONA));
}

#[test]
fn offered_persona_ids_are_distinct() {
    for (i, a) in PERSONAS.iter().enumerate() {
        for b in &PERSONAS[i + 1..] {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn unknown_persona_is_rejected() {
    assert!(!is_offered_persona("stoic"));
    assert!(!is_offered_persona(""));
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_defaults_to_light_default_persona_no_warning() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.persona, DEFAULT_PERSONA);
    assert!(!state.rate_warning);
}
