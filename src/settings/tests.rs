use super::Settings;
use crate::store::{KvStore, MemStore};

#[test]
fn empty_store_yields_defaults() {
    let store = MemStore::new();
    let settings = Settings::load(&store);
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.code_length, 4);
    assert_eq!(settings.reference_number, 4050);
    assert!(settings.activated);
}

#[test]
fn save_then_load_round_trips() {
    let mut store = MemStore::new();
    let settings = Settings {
        code_length: 6,
        reference_number: -42,
        forced_errors: 2,
        notes_mode: true,
        ghost_mode: true,
        spectator_name: "Dana".into(),
        activated: false,
    };
    settings.save(&mut store).unwrap();
    assert_eq!(Settings::load(&store), settings);
}

#[test]
fn unparseable_value_keeps_default() {
    let mut store = MemStore::new();
    store.set(super::KEY_REFERENCE, "not-a-number").unwrap();
    store.set(super::KEY_GHOST_MODE, "maybe").unwrap();
    let settings = Settings::load(&store);
    assert_eq!(settings.reference_number, 4050);
    assert!(!settings.ghost_mode);
}

#[test]
fn code_length_outside_allowed_set_keeps_default() {
    let mut store = MemStore::new();
    store.set(super::KEY_CODE_LENGTH, "5").unwrap();
    assert_eq!(Settings::load(&store).code_length, 4);
}

#[test]
fn partial_profile_overrides_only_present_keys() {
    let mut store = MemStore::new();
    store.set(super::KEY_CODE_LENGTH, "6").unwrap();
    let settings = Settings::load(&store);
    assert_eq!(settings.code_length, 6);
    assert_eq!(settings.reference_number, 4050);
    assert!(!settings.notes_mode);
}

#[test]
fn legacy_numeric_flags_parse() {
    let mut store = MemStore::new();
    store.set(super::KEY_NOTES_MODE, "1").unwrap();
    store.set(super::KEY_ACTIVATED, "0").unwrap();
    let settings = Settings::load(&store);
    assert!(settings.notes_mode);
    assert!(!settings.activated);
}
