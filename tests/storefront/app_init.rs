//! Integration tests for root composition.
//!
//! Tests cover:
//! - Initialization with a fresh config directory
//! - Settings file driving storage key and debounce
//! - External catalog loading and failure

use shopup::app::App;

#[test]
/// What: A fresh config directory yields defaults, the built-in catalog and an empty wishlist.
fn integration_app_init_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let app = App::init(Some(dir.path()), None).expect("init");
    assert_eq!(app.catalog.len(), 12);
    assert_eq!(app.wishlist.count(), 0);
    assert_eq!(app.settings.debounce_ms, 300);
    assert_eq!(app.config_dir, dir.path());
}

#[test]
/// What: The wishlist persists under the configured key and storage directory across inits.
fn integration_app_wishlist_round_trip_with_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store_dir = dir.path().join("custom-store");
    std::fs::write(
        dir.path().join("settings.conf"),
        format!(
            "wishlist_key = favorites\nstorage_dir = {}\ndebounce_ms = 120\n",
            store_dir.display()
        ),
    )
    .expect("write settings");

    let mut app = App::init(Some(dir.path()), None).expect("init");
    assert_eq!(app.settings.debounce_ms, 120);
    app.wishlist.add("6");
    app.wishlist.add("11");
    drop(app);

    assert!(store_dir.join("favorites.json").is_file());
    let app = App::init(Some(dir.path()), None).expect("re-init");
    assert!(app.wishlist.contains("6"));
    assert!(app.wishlist.contains("11"));
    let names: Vec<&str> = app
        .wishlist
        .products(&app.catalog)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Coca-Cola Original", "Surf Excel Easy Wash"]);
}

#[test]
/// What: An external catalog replaces the built-in one; a broken file fails init.
fn integration_app_external_catalog() {
    let dir = tempfile::tempdir().expect("tempdir");
    let catalog_path = dir.path().join("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"{"categories":[{"id":"tea","name":"Tea"}],"products":[{"id":"t1","name":"Darjeeling","price":240,"unit":"100g","category":"tea","description":"First flush"}]}"#,
    )
    .expect("write catalog");
    let app = App::init(Some(dir.path()), Some(&catalog_path)).expect("init");
    assert_eq!(app.catalog.len(), 1);
    assert_eq!(app.catalog.by_category("tea").len(), 1);

    std::fs::write(&catalog_path, "{ not json").expect("write broken");
    assert!(App::init(Some(dir.path()), Some(&catalog_path)).is_err());
}
