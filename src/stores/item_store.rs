use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::errors::InternalError;
use crate::errors::internal::ItemError;
use crate::stores::clock::now_micros;
use crate::types::db::item::{self, ActiveModel, Entity as Item};

/// Fields for a new item
#[derive(Debug, Clone)]
pub struct NewItem {
    pub name: String,
    pub checked_out: bool,
    pub person_id: Option<i32>,
}

impl NewItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked_out: false,
            person_id: None,
        }
    }
}

/// Partial update of an item; `None` leaves a field untouched
///
/// `person_id` is `Some(None)` to clear the holder.
#[derive(Debug, Clone, Default)]
pub struct ItemChanges {
    pub name: Option<String>,
    pub checked_out: Option<bool>,
    pub person_id: Option<Option<i32>>,
}

/// Restricts an item listing
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemFilter {
    pub checked_out: Option<bool>,
}

impl ItemFilter {
    /// Items currently checked out
    pub fn checked_out() -> Self {
        Self {
            checked_out: Some(true),
        }
    }
}

/// Repository for item records
///
/// Does not resolve `person_id`; callers check the holder exists before writing.
#[derive(Debug, Default)]
pub struct ItemStore;

impl ItemStore {
    pub fn new() -> Self {
        Self
    }

    /// Insert a new item, stamping `created` and `updated`
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored item with its generated id
    /// * `Err(InternalError)` - Empty name or database error
    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        new_item: NewItem,
    ) -> Result<item::Model, InternalError> {
        validate_name(&new_item.name)?;

        let now = now_micros();
        let model = ActiveModel {
            id: NotSet,
            name: Set(new_item.name),
            checked_out: Set(new_item.checked_out),
            person_id: Set(new_item.person_id),
            created: Set(now),
            updated: Set(now),
        };

        let created = model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("create_item", e))?;

        tracing::debug!(item_id = created.id, "Item created");

        Ok(created)
    }

    pub async fn find(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> Result<Option<item::Model>, InternalError> {
        Item::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_item", e))
    }

    /// Get an item by id, failing with `ItemError::NotFound` when absent
    pub async fn get(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> Result<item::Model, InternalError> {
        self.find(conn, id)
            .await?
            .ok_or_else(|| ItemError::NotFound(id).into())
    }

    /// List items, most recently updated first
    pub async fn list(
        &self,
        conn: &impl ConnectionTrait,
        filter: ItemFilter,
    ) -> Result<Vec<item::Model>, InternalError> {
        let mut query = Item::find();
        if let Some(checked_out) = filter.checked_out {
            query = query.filter(item::Column::CheckedOut.eq(checked_out));
        }

        query
            .order_by_desc(item::Column::Updated)
            .order_by_desc(item::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    /// Apply a partial update and refresh `updated`
    ///
    /// # Returns
    /// * `Ok(Model)` - The item after the update
    /// * `Err(InternalError)` - Item not found, empty name or database error
    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
        changes: ItemChanges,
    ) -> Result<item::Model, InternalError> {
        let existing = self.get(conn, id).await?;
        self.apply(conn, existing, changes).await
    }

    /// Apply a partial update to an item the caller has already loaded
    pub async fn apply(
        &self,
        conn: &impl ConnectionTrait,
        existing: item::Model,
        changes: ItemChanges,
    ) -> Result<item::Model, InternalError> {
        if let Some(name) = &changes.name {
            validate_name(name)?;
        }

        let mut active_model: ActiveModel = existing.into();

        if let Some(name) = changes.name {
            active_model.name = Set(name);
        }
        if let Some(checked_out) = changes.checked_out {
            active_model.checked_out = Set(checked_out);
        }
        if let Some(person_id) = changes.person_id {
            active_model.person_id = Set(person_id);
        }
        active_model.updated = Set(now_micros());

        active_model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_item", e))
    }

    /// Remove an item
    pub async fn delete(&self, conn: &impl ConnectionTrait, id: i32) -> Result<(), InternalError> {
        let result = Item::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        if result.rows_affected == 0 {
            return Err(ItemError::NotFound(id).into());
        }

        tracing::debug!(item_id = id, "Item deleted");

        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), InternalError> {
    if name.trim().is_empty() {
        return Err(InternalError::validation("name", "must not be empty"));
    }
    Ok(())
}
