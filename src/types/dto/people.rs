use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};

/// Request model for creating a new person
#[derive(Object, Debug)]
pub struct CreatePersonRequest {
    #[oai(validator(min_length = 1, max_length = 100))]
    pub firstname: String,

    #[oai(validator(min_length = 1, max_length = 100))]
    pub lastname: String,
}

/// Response model representing a person
#[derive(Object, Debug, Clone, PartialEq)]
pub struct PersonResponse {
    pub id: i32,

    /// Display name, formatted as "lastname, firstname"
    pub name: String,

    pub firstname: String,

    pub lastname: String,

    /// Timestamp when the person was created (RFC 3339)
    pub created: String,

    /// Number of items the person currently holds
    pub n_items: u64,
}

/// Person collection, newest-created first
#[derive(Object, Debug)]
pub struct PersonListResponse {
    pub people: Vec<PersonResponse>,
}

/// Confirmation returned by person create
#[derive(Object, Debug)]
pub struct PersonMutationResponse {
    pub message: String,
    pub person: PersonResponse,
}

#[derive(ApiResponse)]
pub enum CreatePersonApiResponse {
    /// Person created
    #[oai(status = 201)]
    Created(Json<PersonMutationResponse>),
}
