//! Integration tests for wishlist persistence on disk.
//!
//! Tests cover:
//! - Write-through after each operation
//! - Reload from disk reproducing the final set
//! - Malformed files treated as empty

use std::collections::HashSet;

use shopup::wishlist::{FileStorage, Storage, WISHLIST_STORAGE_KEY, WishlistStore};

#[test]
/// What: A new store over the same directory sees everything the previous one wrote.
///
/// Inputs:
/// - Mixed add/remove/toggle sequence against a temp directory.
///
/// Output:
/// - Reloaded identifier set equals the final in-memory set.
fn integration_wishlist_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = WishlistStore::load(FileStorage::new(dir.path()));
    store.add("1");
    store.add("5");
    store.toggle("9");
    store.toggle("1");
    store.remove("404");
    store.add("5");
    let expected: HashSet<String> = store.ids().iter().cloned().collect();
    drop(store);

    let reloaded = WishlistStore::load(FileStorage::new(dir.path()));
    let got: HashSet<String> = reloaded.ids().iter().cloned().collect();
    assert_eq!(got, expected);
    assert_eq!(got, HashSet::from(["5".to_string(), "9".to_string()]));
}

#[test]
/// What: The file on disk matches memory after every call, without an explicit flush.
fn integration_wishlist_writes_through() {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = FileStorage::new(dir.path());
    let path = storage.path_for(WISHLIST_STORAGE_KEY);
    let mut store = WishlistStore::load(storage);
    assert!(!path.exists());

    store.toggle("3");
    assert_eq!(std::fs::read_to_string(&path).expect("read"), r#"["3"]"#);
    store.toggle("3");
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "[]");
}

#[test]
/// What: A corrupted wishlist file loads as empty and is overwritten on the next change.
fn integration_wishlist_recovers_from_corruption() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut storage = FileStorage::new(dir.path());
    storage
        .write(WISHLIST_STORAGE_KEY, "{ definitely not an array")
        .expect("seed");

    let mut store = WishlistStore::load(storage);
    assert_eq!(store.count(), 0);
    store.add("2");
    assert_eq!(
        store.storage().read(WISHLIST_STORAGE_KEY).expect("read").as_deref(),
        Some(r#"["2"]"#)
    );
}
