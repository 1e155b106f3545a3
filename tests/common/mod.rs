// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use checkouts_backend::AppData;
use checkouts_backend::api;
use checkouts_backend::config::connect;
use checkouts_backend::stores::NewItem;
use checkouts_backend::types::db::{item, person};
use migration::{Migrator, MigratorTrait};
use poem::endpoint::BoxEndpoint;
use poem::test::{TestClient, TestResponse};
use sea_orm::DatabaseConnection;
use serde_json::Value;

pub const API_PREFIX: &str = "/api/v1";

/// Creates a fresh in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Records seeded before every API test
pub struct Fixture {
    /// Steve Loria, holds `item`
    pub person: person::Model,
    /// Monty Python, holds nothing
    pub person2: person::Model,
    /// "Foo", held by `person`
    pub item: item::Model,
    /// "Bar", unheld, created last
    pub item2: item::Model,
}

pub async fn seed(app_data: &AppData) -> Fixture {
    let db = &app_data.db;

    let person = app_data
        .person_store
        .create(db, "Steve", "Loria")
        .await
        .expect("Failed to seed person");
    let person2 = app_data
        .person_store
        .create(db, "Monty", "Python")
        .await
        .expect("Failed to seed person2");

    let item = app_data
        .item_store
        .create(
            db,
            NewItem {
                person_id: Some(person.id),
                ..NewItem::named("Foo")
            },
        )
        .await
        .expect("Failed to seed item");
    let item2 = app_data
        .item_store
        .create(db, NewItem::named("Bar"))
        .await
        .expect("Failed to seed item2");

    Fixture {
        person,
        person2,
        item,
        item2,
    }
}

/// Full route tree over a seeded throwaway database
pub async fn setup_test_client() -> (TestClient<BoxEndpoint<'static>>, Arc<AppData>, Fixture) {
    let db = setup_test_db().await;
    let app_data = Arc::new(AppData::new(db));
    let fixture = seed(&app_data).await;
    let client = TestClient::new(api::routes(app_data.clone(), API_PREFIX));

    (client, app_data, fixture)
}

pub fn url(path: &str) -> String {
    format!("{}{}", API_PREFIX, path)
}

pub async fn json_body(response: TestResponse) -> Value {
    response
        .0
        .into_body()
        .into_json::<Value>()
        .await
        .expect("Response body is not JSON")
}
