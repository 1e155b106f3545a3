use poem_openapi::param::Path;
use poem_openapi::payload::Json;
use poem_openapi::types::MaybeUndefined;
use poem_openapi::{OpenApi, Tags};
use std::sync::Arc;

use crate::app_data::AppData;
use crate::coordinators::ItemCoordinator;
use crate::errors::ApiError;
use crate::stores::{ItemChanges, NewItem};
use crate::types::dto::common::DeletedResponse;
use crate::types::dto::items::{
    CreateItemApiResponse, CreateItemRequest, ItemListResponse, ItemMutationResponse,
    ItemResponse, UpdateItemRequest,
};

/// Items API
pub struct ItemsApi {
    item_coordinator: ItemCoordinator,
}

impl ItemsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_coordinator: ItemCoordinator::new(app_data),
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// List all items, most recently updated first
    #[oai(path = "/items/", method = "get", tag = "ItemTags::Items")]
    async fn list_items(&self) -> Result<Json<ItemListResponse>, ApiError> {
        let items = self.item_coordinator.list_items().await?;
        Ok(Json(ItemListResponse { items }))
    }

    /// Fetch one item with its holder embedded
    #[oai(path = "/items/:id", method = "get", tag = "ItemTags::Items")]
    async fn get_item(&self, id: Path<i32>) -> Result<Json<ItemResponse>, ApiError> {
        let item = self.item_coordinator.get_item(id.0).await?;
        Ok(Json(item))
    }

    /// Create a new item
    ///
    /// `person_id`, when given, must reference an existing person.
    #[oai(path = "/items/", method = "post", tag = "ItemTags::Items")]
    async fn create_item(
        &self,
        body: Json<CreateItemRequest>,
    ) -> Result<CreateItemApiResponse, ApiError> {
        let item = self.item_coordinator.create_item(new_item(body.0)).await?;

        Ok(CreateItemApiResponse::Created(Json(ItemMutationResponse {
            message: "Successfully created new item.".to_string(),
            item,
        })))
    }

    /// Update an item in place
    ///
    /// Only the fields present in the body change. `person_id: null` releases the item.
    #[oai(path = "/items/:id", method = "put", tag = "ItemTags::Items")]
    async fn update_item(
        &self,
        id: Path<i32>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<ItemMutationResponse>, ApiError> {
        let item = self
            .item_coordinator
            .update_item(id.0, item_changes(body.0))
            .await?;

        Ok(Json(ItemMutationResponse {
            message: "Successfully updated item.".to_string(),
            item,
        }))
    }

    #[oai(path = "/items/:id", method = "delete", tag = "ItemTags::Items")]
    async fn delete_item(&self, id: Path<i32>) -> Result<Json<DeletedResponse>, ApiError> {
        self.item_coordinator.delete_item(id.0).await?;

        Ok(Json(DeletedResponse {
            message: "Successfully deleted item.".to_string(),
            id: id.0,
        }))
    }
}

fn new_item(request: CreateItemRequest) -> NewItem {
    NewItem {
        name: request.name,
        checked_out: request.checked_out.unwrap_or(false),
        person_id: request.person_id,
    }
}

fn item_changes(request: UpdateItemRequest) -> ItemChanges {
    let person_id = match request.person_id {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(person_id) => Some(Some(person_id)),
    };

    ItemChanges {
        name: request.name,
        checked_out: request.checked_out,
        person_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults_to_not_checked_out() {
        let item = new_item(CreateItemRequest {
            name: "Ipad".to_string(),
            checked_out: None,
            person_id: None,
        });

        assert_eq!(item.name, "Ipad");
        assert!(!item.checked_out);
        assert_eq!(item.person_id, None);
    }

    #[test]
    fn test_item_changes_leaves_absent_holder_untouched() {
        let changes = item_changes(UpdateItemRequest {
            name: None,
            checked_out: Some(true),
            person_id: MaybeUndefined::Undefined,
        });

        assert_eq!(changes.checked_out, Some(true));
        assert_eq!(changes.person_id, None);
    }

    #[test]
    fn test_item_changes_null_holder_clears() {
        let changes = item_changes(UpdateItemRequest {
            name: None,
            checked_out: None,
            person_id: MaybeUndefined::Null,
        });

        assert_eq!(changes.person_id, Some(None));
    }

    #[test]
    fn test_item_changes_sets_holder() {
        let changes = item_changes(UpdateItemRequest {
            name: Some("Ipod".to_string()),
            checked_out: None,
            person_id: MaybeUndefined::Value(2),
        });

        assert_eq!(changes.name.as_deref(), Some("Ipod"));
        assert_eq!(changes.person_id, Some(Some(2)));
    }
}
