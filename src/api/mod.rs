// API layer - HTTP endpoints
pub mod checkouts;
pub mod health;
pub mod items;
pub mod people;

use std::sync::Arc;

pub use checkouts::CheckoutsApi;
pub use health::HealthApi;
pub use items::ItemsApi;
pub use people::PeopleApi;

use poem::endpoint::BoxEndpoint;
use poem::middleware::{NormalizePath, TrailingSlash};
use poem::{EndpointExt, Route};
use poem_openapi::OpenApiService;
use poem_openapi::error::{ParseParamError, ParseRequestPayloadError};

use crate::app_data::AppData;
use crate::errors::ApiError;

/// Compose the full route tree
///
/// Resource endpoints are nested under `api_prefix`; Swagger UI is served at
/// `/swagger`. Collection paths answer with or without a trailing slash
/// (`/items/` and `/items`). Bodies and path parameters that fail to parse
/// are answered with the same JSON error body as every other 400.
pub fn routes(app_data: Arc<AppData>, api_prefix: &str) -> BoxEndpoint<'static> {
    let apis = (
        HealthApi::new(app_data.clone()),
        ItemsApi::new(app_data.clone()),
        PeopleApi::new(app_data.clone()),
        CheckoutsApi::new(app_data),
    );

    let api_service = OpenApiService::new(apis, "Checkouts API", env!("CARGO_PKG_VERSION"))
        .server(api_prefix.to_string());

    let ui = api_service.swagger_ui();

    Route::new()
        .nest(api_prefix, api_service)
        .nest("/swagger", ui)
        .with(NormalizePath::new(TrailingSlash::Trim))
        .catch_error(invalid_payload)
        .catch_error(invalid_param)
        .boxed()
}

async fn invalid_payload(err: ParseRequestPayloadError) -> ApiError {
    tracing::debug!("Rejected request body: {}", err);
    ApiError::invalid_request(err.to_string())
}

async fn invalid_param(err: ParseParamError) -> ApiError {
    tracing::debug!("Rejected request parameter: {}", err);
    ApiError::invalid_request(err.to_string())
}
