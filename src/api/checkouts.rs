use poem_openapi::payload::Json;
use poem_openapi::{OpenApi, Tags};
use std::sync::Arc;

use crate::app_data::AppData;
use crate::coordinators::ItemCoordinator;
use crate::errors::ApiError;
use crate::types::dto::items::ItemListResponse;

/// Recent checkouts API
pub struct CheckoutsApi {
    item_coordinator: ItemCoordinator,
}

impl CheckoutsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            item_coordinator: ItemCoordinator::new(app_data),
        }
    }
}

#[derive(Tags)]
enum CheckoutTags {
    /// Views over checked out items
    Checkouts,
}

#[OpenApi]
impl CheckoutsApi {
    /// Items currently checked out, most recently updated first
    #[oai(path = "/recentcheckouts/", method = "get", tag = "CheckoutTags::Checkouts")]
    async fn recent_checkouts(&self) -> Result<Json<ItemListResponse>, ApiError> {
        let items = self.item_coordinator.recent_checkouts().await?;
        Ok(Json(ItemListResponse { items }))
    }
}
