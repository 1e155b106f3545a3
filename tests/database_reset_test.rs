use checkouts_backend::config::{connect, migrate_database, reset_database};
use checkouts_backend::stores::{ItemFilter, ItemStore, NewItem, PersonStore};
use checkouts_backend::cli::migrate;

#[tokio::test]
async fn test_reset_drops_and_recreates_file_database() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

    let db = connect(&url).await.unwrap();
    migrate_database(&db).await.unwrap();

    let people = PersonStore::new();
    let items = ItemStore::new();
    people.create(&db, "Steve", "Loria").await.unwrap();
    items.create(&db, NewItem::named("Foo")).await.unwrap();

    reset_database(&db).await.unwrap();

    assert!(people.list(&db).await.unwrap().is_empty());
    assert!(items.list(&db, ItemFilter::default()).await.unwrap().is_empty());

    // Schema is usable again straight away
    items.create(&db, NewItem::named("Bar")).await.unwrap();
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let db = connect("sqlite::memory:").await.unwrap();

    migrate::run_migrations(&db).await.unwrap();
    migrate::run_migrations(&db).await.unwrap();

    assert!(PersonStore::new().list(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_reset_requires_confirmation() {
    let db = connect("sqlite::memory:").await.unwrap();
    migrate_database(&db).await.unwrap();
    PersonStore::new().create(&db, "Steve", "Loria").await.unwrap();

    assert!(migrate::reset(&db, false).await.is_err());
    assert_eq!(PersonStore::new().list(&db).await.unwrap().len(), 1);
}
