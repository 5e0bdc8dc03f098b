use super::{FileStore, KvStore, MemStore, StoreError, MAX_VALUE_BYTES};

#[test]
fn missing_key_reads_as_none() {
    let store = MemStore::new();
    assert_eq!(store.get("referenceNumber"), None);
}

#[test]
fn set_then_get_round_trips() {
    let mut store = MemStore::new();
    store.set("referenceNumber", "-42").unwrap();
    assert_eq!(store.get("referenceNumber").as_deref(), Some("-42"));
}

#[test]
fn oversized_value_is_refused_without_clobbering() {
    let mut store = MemStore::new();
    store.set("bgLock", "small").unwrap();
    let huge = "x".repeat(MAX_VALUE_BYTES + 1);
    let err = store.set("bgLock", &huge).unwrap_err();
    assert!(matches!(err, StoreError::QuotaExceeded { .. }));
    assert_eq!(store.get("bgLock").as_deref(), Some("small"));
}

#[test]
fn oversized_value_leaves_sibling_keys_untouched() {
    let mut store = MemStore::new();
    store.set("bgHome", "kept").unwrap();
    let huge = "x".repeat(MAX_VALUE_BYTES + 1);
    assert!(store.set("bgLock", &huge).is_err());
    assert_eq!(store.get("bgHome").as_deref(), Some("kept"));
    assert_eq!(store.get("bgLock"), None);
}

#[test]
fn value_at_quota_limit_is_accepted() {
    let mut store = MemStore::new();
    let max = "x".repeat(MAX_VALUE_BYTES);
    assert!(store.set("bgLock", &max).is_ok());
}

#[test]
fn file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("codeLength", "6").unwrap();
        store.set("ghostMode", "true").unwrap();
    }
    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(store.get("codeLength").as_deref(), Some("6"));
    assert_eq!(store.get("ghostMode").as_deref(), Some("true"));
}

#[test]
fn file_store_remove_persists() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = FileStore::open(dir.path()).unwrap();
        store.set("spectatorName", "Dana").unwrap();
        store.remove("spectatorName").unwrap();
    }
    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(store.get("spectatorName"), None);
}

#[test]
fn file_store_starts_empty_on_corrupt_profile() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(super::PROFILE_FILE), "not json{{").unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    assert_eq!(store.get("codeLength"), None);
}
