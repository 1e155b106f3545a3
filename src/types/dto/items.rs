use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use poem_openapi::types::MaybeUndefined;

use crate::types::dto::people::PersonResponse;

/// Request model for creating a new item
#[derive(Object, Debug)]
pub struct CreateItemRequest {
    /// Name of the item (1-100 characters)
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,

    /// Whether the item starts out checked out (defaults to false)
    pub checked_out: Option<bool>,

    /// Identifier of the person holding the item
    pub person_id: Option<i32>,
}

/// Request model for a partial item update
///
/// Omitted fields are left unchanged. `person_id: null` clears the holder.
#[derive(Object, Debug)]
pub struct UpdateItemRequest {
    /// New name of the item (1-100 characters)
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: Option<String>,

    /// New checked out state
    pub checked_out: Option<bool>,

    /// New holder, or null to clear it
    pub person_id: MaybeUndefined<i32>,
}

/// Response model representing an item with its embedded holder
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ItemResponse {
    pub id: i32,

    pub name: String,

    pub checked_out: bool,

    /// Timestamp when the item was created (RFC 3339)
    pub created: String,

    /// Timestamp of the last change to the item (RFC 3339)
    pub updated: String,

    /// Person currently holding the item
    pub person: Option<PersonResponse>,
}

/// Item collection, newest-updated first
#[derive(Object, Debug)]
pub struct ItemListResponse {
    pub items: Vec<ItemResponse>,
}

/// Confirmation returned by item create and update
#[derive(Object, Debug)]
pub struct ItemMutationResponse {
    pub message: String,
    pub item: ItemResponse,
}

#[derive(ApiResponse)]
pub enum CreateItemApiResponse {
    /// Item created
    #[oai(status = 201)]
    Created(Json<ItemMutationResponse>),
}
