use poem_openapi::param::Path;
use poem_openapi::payload::Json;
use poem_openapi::{OpenApi, Tags};
use std::sync::Arc;

use crate::app_data::AppData;
use crate::coordinators::PersonCoordinator;
use crate::errors::ApiError;
use crate::types::dto::common::DeletedResponse;
use crate::types::dto::people::{
    CreatePersonApiResponse, CreatePersonRequest, PersonListResponse, PersonMutationResponse,
    PersonResponse,
};

/// People API
pub struct PeopleApi {
    person_coordinator: PersonCoordinator,
}

impl PeopleApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            person_coordinator: PersonCoordinator::new(app_data),
        }
    }
}

/// API tags for people endpoints
#[derive(Tags)]
enum PeopleTags {
    /// Person management endpoints
    People,
}

#[OpenApi]
impl PeopleApi {
    /// List all people, most recently created first
    #[oai(path = "/people/", method = "get", tag = "PeopleTags::People")]
    async fn list_people(&self) -> Result<Json<PersonListResponse>, ApiError> {
        let people = self.person_coordinator.list_people().await?;
        Ok(Json(PersonListResponse { people }))
    }

    #[oai(path = "/people/:id", method = "get", tag = "PeopleTags::People")]
    async fn get_person(&self, id: Path<i32>) -> Result<Json<PersonResponse>, ApiError> {
        let person = self.person_coordinator.get_person(id.0).await?;
        Ok(Json(person))
    }

    #[oai(path = "/people/", method = "post", tag = "PeopleTags::People")]
    async fn create_person(
        &self,
        body: Json<CreatePersonRequest>,
    ) -> Result<CreatePersonApiResponse, ApiError> {
        let CreatePersonRequest { firstname, lastname } = body.0;
        let person = self
            .person_coordinator
            .create_person(firstname, lastname)
            .await?;

        Ok(CreatePersonApiResponse::Created(Json(PersonMutationResponse {
            message: "Successfully created new person.".to_string(),
            person,
        })))
    }

    /// Delete a person
    ///
    /// Items the person held are kept and released.
    #[oai(path = "/people/:id", method = "delete", tag = "PeopleTags::People")]
    async fn delete_person(&self, id: Path<i32>) -> Result<Json<DeletedResponse>, ApiError> {
        self.person_coordinator.delete_person(id.0).await?;

        Ok(Json(DeletedResponse {
            message: "Successfully deleted person.".to_string(),
            id: id.0,
        }))
    }
}
