use std::collections::HashMap;
use std::sync::Arc;

use sea_orm::ConnectionTrait;

use crate::errors::InternalError;
use crate::serializers::{PersonSerializer, format_timestamp};
use crate::stores::PersonStore;
use crate::types::db::{item, person};
use crate::types::dto::items::ItemResponse;
use crate::types::dto::people::PersonResponse;

/// Shapes item records for output, embedding the full holder
///
/// The holder is loaded through `person_id` explicitly. A reference that no
/// longer resolves is rendered as no holder.
pub struct ItemSerializer {
    person_store: Arc<PersonStore>,
    person_serializer: PersonSerializer,
}

impl ItemSerializer {
    pub fn new(person_store: Arc<PersonStore>) -> Self {
        Self {
            person_serializer: PersonSerializer::new(person_store.clone()),
            person_store,
        }
    }

    pub async fn serialize(
        &self,
        conn: &impl ConnectionTrait,
        item: &item::Model,
    ) -> Result<ItemResponse, InternalError> {
        let person = match item.person_id {
            Some(person_id) => match self.person_store.find(conn, person_id).await? {
                Some(holder) => Some(self.person_serializer.serialize(conn, &holder).await?),
                None => None,
            },
            None => None,
        };

        Ok(Self::compose(item, person))
    }

    /// Serialize a list with one lookup for holders and one for their counts
    pub async fn serialize_many(
        &self,
        conn: &impl ConnectionTrait,
        items: &[item::Model],
    ) -> Result<Vec<ItemResponse>, InternalError> {
        let mut holder_ids: Vec<i32> = items.iter().filter_map(|i| i.person_id).collect();
        holder_ids.sort_unstable();
        holder_ids.dedup();

        let holders: HashMap<i32, person::Model> =
            self.person_store.find_many(conn, &holder_ids).await?;
        let counts = self
            .person_store
            .count_items_by_person(conn, &holder_ids)
            .await?;

        Ok(items
            .iter()
            .map(|item| {
                let person = item
                    .person_id
                    .and_then(|id| holders.get(&id))
                    .map(|holder| {
                        PersonSerializer::compose(holder, counts.get(&holder.id).copied().unwrap_or(0))
                    });
                Self::compose(item, person)
            })
            .collect())
    }

    pub fn compose(item: &item::Model, person: Option<PersonResponse>) -> ItemResponse {
        ItemResponse {
            id: item.id,
            name: item.name.clone(),
            checked_out: item.checked_out,
            created: format_timestamp(item.created),
            updated: format_timestamp(item.updated),
            person,
        }
    }
}
