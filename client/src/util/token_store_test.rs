use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::new().load(), None);
}

#[test]
fn memory_store_save_replaces_wholesale() {
    let store = MemoryTokenStore::new();
    store.save("first");
    store.save("second");
    assert_eq!(store.load().as_deref(), Some("second"));
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryTokenStore::with_token("abc");
    store.clear();
    store.clear();
    assert_eq!(store.load(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_store_is_absent_outside_browser() {
    let store = LocalTokenStore;
    store.save("abc");
    assert_eq!(store.load(), None);
    store.clear();
}
