use std::sync::Arc;

use sea_orm::ConnectionTrait;

use crate::errors::InternalError;
use crate::serializers::format_timestamp;
use crate::stores::PersonStore;
use crate::types::db::person;
use crate::types::dto::people::PersonResponse;

/// Shapes person records for output
///
/// `n_items` is counted from the store on every call, never cached.
pub struct PersonSerializer {
    person_store: Arc<PersonStore>,
}

impl PersonSerializer {
    pub fn new(person_store: Arc<PersonStore>) -> Self {
        Self { person_store }
    }

    pub async fn serialize(
        &self,
        conn: &impl ConnectionTrait,
        person: &person::Model,
    ) -> Result<PersonResponse, InternalError> {
        let n_items = self.person_store.count_items(conn, person.id).await?;
        Ok(Self::compose(person, n_items))
    }

    /// Serialize a list, counting items for all people in one query
    pub async fn serialize_many(
        &self,
        conn: &impl ConnectionTrait,
        people: &[person::Model],
    ) -> Result<Vec<PersonResponse>, InternalError> {
        let ids: Vec<i32> = people.iter().map(|p| p.id).collect();
        let counts = self.person_store.count_items_by_person(conn, &ids).await?;

        Ok(people
            .iter()
            .map(|p| Self::compose(p, counts.get(&p.id).copied().unwrap_or(0)))
            .collect())
    }

    /// Pure field composition from a record and its item count
    pub fn compose(person: &person::Model, n_items: u64) -> PersonResponse {
        PersonResponse {
            id: person.id,
            name: display_name(person),
            firstname: person.firstname.clone(),
            lastname: person.lastname.clone(),
            created: format_timestamp(person.created),
            n_items,
        }
    }
}

/// "lastname, firstname"
pub fn display_name(person: &person::Model) -> String {
    format!("{}, {}", person.lastname, person.firstname)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steve() -> person::Model {
        person::Model {
            id: 1,
            firstname: "Steve".to_string(),
            lastname: "Loria".to_string(),
            created: 0,
        }
    }

    #[test]
    fn test_display_name_is_last_comma_first() {
        assert_eq!(display_name(&steve()), "Loria, Steve");
    }

    #[test]
    fn test_compose_copies_fields_and_count() {
        let response = PersonSerializer::compose(&steve(), 3);

        assert_eq!(response.id, 1);
        assert_eq!(response.name, "Loria, Steve");
        assert_eq!(response.firstname, "Steve");
        assert_eq!(response.lastname, "Loria");
        assert_eq!(response.created, "1970-01-01T00:00:00.000000Z");
        assert_eq!(response.n_items, 3);
    }
}
