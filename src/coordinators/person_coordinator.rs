use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::serializers::PersonSerializer;
use crate::stores::PersonStore;
use crate::types::dto::people::PersonResponse;

/// Person coordinator that orchestrates person workflows
pub struct PersonCoordinator {
    db: DatabaseConnection,
    person_store: Arc<PersonStore>,
    person_serializer: PersonSerializer,
}

impl PersonCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            db: app_data.db.clone(),
            person_store: app_data.person_store.clone(),
            person_serializer: PersonSerializer::new(app_data.person_store.clone()),
        }
    }

    /// All people, most recently created first
    pub async fn list_people(&self) -> Result<Vec<PersonResponse>, InternalError> {
        let people = self.person_store.list(&self.db).await?;
        self.person_serializer.serialize_many(&self.db, &people).await
    }

    pub async fn get_person(&self, id: i32) -> Result<PersonResponse, InternalError> {
        let person = self.person_store.get(&self.db, id).await?;
        self.person_serializer.serialize(&self.db, &person).await
    }

    pub async fn create_person(
        &self,
        firstname: String,
        lastname: String,
    ) -> Result<PersonResponse, InternalError> {
        let person = self.person_store.create(&self.db, firstname, lastname).await?;

        tracing::info!(person_id = person.id, "Person created");

        self.person_serializer.serialize(&self.db, &person).await
    }

    /// Delete a person; the items they held stay, without a holder
    pub async fn delete_person(&self, id: i32) -> Result<(), InternalError> {
        self.person_store.delete(&self.db, id).await?;

        tracing::info!(person_id = id, "Person deleted");

        Ok(())
    }
}
