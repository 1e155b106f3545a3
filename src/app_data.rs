use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::{ItemStore, PersonStore};

/// Centralized application data following the main-owned stores pattern
///
/// The connection is opened by the caller (main, CLI or a test) and handed in
/// here; nothing reaches for a global connection.
///
/// ```text
/// main.rs / tests
///   ↓ connect + migrate
/// AppData::new(db)
///   ├─ db (DatabaseConnection)
///   ├─ person_store (Arc<PersonStore>)
///   └─ item_store (Arc<ItemStore>)
///   ↓ wrapped in Arc<AppData>
///   ├─ PersonCoordinator::new(app_data)
///   └─ ItemCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub person_store: Arc<PersonStore>,
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    pub fn new(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");

        Self {
            db,
            person_store: Arc::new(PersonStore::new()),
            item_store: Arc::new(ItemStore::new()),
        }
    }
}
