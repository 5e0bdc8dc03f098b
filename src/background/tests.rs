use super::{Backgrounds, Placement, Slot};
use crate::store::{KvStore, MemStore, MAX_VALUE_BYTES};
use std::io::Write;

fn temp_image(name: &str, bytes: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(bytes).unwrap();
    (dir, path)
}

#[test]
fn upload_persists_a_data_url() {
    let (_dir, path) = temp_image("backdrop.png", b"\x89PNG fake");
    let mut store = MemStore::new();
    let mut backgrounds = Backgrounds::new();
    let placement = backgrounds
        .install_from_file(Slot::Lock, &path, &mut store)
        .unwrap();
    assert_eq!(placement, Placement::Persisted);
    let stored = store.get("bgLock").unwrap();
    assert!(stored.starts_with("data:image/png;base64,"));
    assert_eq!(backgrounds.current(Slot::Lock, &store), Some(stored));
}

#[test]
fn jpeg_extension_sets_media_type() {
    let (_dir, path) = temp_image("photo.JPG", b"jpeg bytes");
    let mut store = MemStore::new();
    let mut backgrounds = Backgrounds::new();
    backgrounds
        .install_from_file(Slot::Home, &path, &mut store)
        .unwrap();
    assert!(store
        .get("bgHome")
        .unwrap()
        .starts_with("data:image/jpeg;base64,"));
}

#[test]
fn oversized_upload_falls_back_to_memory() {
    // Base64 inflates by 4/3, so this payload is guaranteed over quota.
    let big = vec![0u8; MAX_VALUE_BYTES];
    let (_dir, path) = temp_image("huge.png", &big);
    let mut store = MemStore::new();
    store.set("bgHome", "existing").unwrap();
    let mut backgrounds = Backgrounds::new();

    let placement = backgrounds
        .install_from_file(Slot::Lock, &path, &mut store)
        .unwrap();
    assert_eq!(placement, Placement::MemoryOnly);
    // Nothing persisted for the refused slot, other keys untouched.
    assert_eq!(store.get("bgLock"), None);
    assert_eq!(store.get("bgHome").as_deref(), Some("existing"));
    // But the session still shows the backdrop.
    assert!(backgrounds.current(Slot::Lock, &store).is_some());
    assert!(backgrounds.is_custom(Slot::Lock, &store));
}

#[test]
fn missing_slot_means_default_backdrop() {
    let store = MemStore::new();
    let backgrounds = Backgrounds::new();
    assert_eq!(backgrounds.current(Slot::Notes, &store), None);
    assert!(!backgrounds.is_custom(Slot::Notes, &store));
}

#[test]
fn missing_file_reports_error_without_touching_store() {
    let mut store = MemStore::new();
    let mut backgrounds = Backgrounds::new();
    let missing = std::path::Path::new("/definitely/not/here.png");
    assert!(backgrounds
        .install_from_file(Slot::Lock, missing, &mut store)
        .is_err());
    assert_eq!(store.get("bgLock"), None);
}

#[test]
fn successful_persist_clears_stale_memory_overlay() {
    let big = vec![0u8; MAX_VALUE_BYTES];
    let (_dir, big_path) = temp_image("huge.png", &big);
    let (_dir2, small_path) = temp_image("small.png", b"tiny");
    let mut store = MemStore::new();
    let mut backgrounds = Backgrounds::new();

    backgrounds
        .install_from_file(Slot::Lock, &big_path, &mut store)
        .unwrap();
    backgrounds
        .install_from_file(Slot::Lock, &small_path, &mut store)
        .unwrap();
    // The persisted value is now the source of truth.
    assert_eq!(
        backgrounds.current(Slot::Lock, &store),
        store.get("bgLock")
    );
}
