use std::sync::Arc;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::ItemError;
use crate::serializers::ItemSerializer;
use crate::stores::{ItemChanges, ItemFilter, ItemStore, NewItem, PersonStore};
use crate::types::dto::items::ItemResponse;

/// Item coordinator that orchestrates item workflows
///
/// Resolves holder references, drives the item store and shapes results
/// through the item serializer.
pub struct ItemCoordinator {
    db: DatabaseConnection,
    item_store: Arc<ItemStore>,
    person_store: Arc<PersonStore>,
    item_serializer: ItemSerializer,
}

impl ItemCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            item_store: app_data.item_store.clone(),
            person_store: app_data.person_store.clone(),
            item_serializer: ItemSerializer::new(app_data.person_store.clone()),
        }
    }

    /// All items, most recently updated first
    pub async fn list_items(&self) -> Result<Vec<ItemResponse>, InternalError> {
        let items = self.item_store.list(&self.db, ItemFilter::default()).await?;
        self.item_serializer.serialize_many(&self.db, &items).await
    }

    /// Items currently checked out, most recently updated first
    pub async fn recent_checkouts(&self) -> Result<Vec<ItemResponse>, InternalError> {
        let items = self.item_store.list(&self.db, ItemFilter::checked_out()).await?;
        self.item_serializer.serialize_many(&self.db, &items).await
    }

    pub async fn get_item(&self, id: i32) -> Result<ItemResponse, InternalError> {
        let item = self.item_store.get(&self.db, id).await?;
        self.item_serializer.serialize(&self.db, &item).await
    }

    /// Orchestrate item creation
    ///
    /// 1. Check the holder exists when `person_id` is given
    /// 2. Insert the item
    ///
    /// Both steps share one transaction.
    pub async fn create_item(&self, new_item: NewItem) -> Result<ItemResponse, InternalError> {
        let txn = self.db.begin().await.map_err(InternalError::transaction_begin)?;

        if let Some(person_id) = new_item.person_id {
            self.ensure_person_exists(&txn, person_id).await?;
        }
        let item = self.item_store.create(&txn, new_item).await?;

        txn.commit().await.map_err(InternalError::transaction_commit)?;

        tracing::info!(item_id = item.id, person_id = ?item.person_id, "Item created");

        self.item_serializer.serialize(&self.db, &item).await
    }

    /// Orchestrate a partial item update
    ///
    /// The item is loaded once; a missing item wins over a missing holder.
    /// A new holder must exist; clearing the holder needs no lookup.
    pub async fn update_item(
        &self,
        id: i32,
        changes: ItemChanges,
    ) -> Result<ItemResponse, InternalError> {
        let txn = self.db.begin().await.map_err(InternalError::transaction_begin)?;

        let existing = self.item_store.get(&txn, id).await?;
        if let Some(Some(person_id)) = changes.person_id {
            self.ensure_person_exists(&txn, person_id).await?;
        }
        let item = self.item_store.apply(&txn, existing, changes).await?;

        txn.commit().await.map_err(InternalError::transaction_commit)?;

        tracing::info!(
            item_id = item.id,
            checked_out = item.checked_out,
            person_id = ?item.person_id,
            "Item updated"
        );

        self.item_serializer.serialize(&self.db, &item).await
    }

    pub async fn delete_item(&self, id: i32) -> Result<(), InternalError> {
        self.item_store.delete(&self.db, id).await?;

        tracing::info!(item_id = id, "Item deleted");

        Ok(())
    }

    async fn ensure_person_exists(
        &self,
        conn: &impl ConnectionTrait,
        person_id: i32,
    ) -> Result<(), InternalError> {
        match self.person_store.find(conn, person_id).await? {
            Some(_) => Ok(()),
            None => Err(ItemError::PersonNotFound(person_id).into()),
        }
    }
}
