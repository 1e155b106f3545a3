use std::collections::HashMap;

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::errors::InternalError;
use crate::errors::internal::PersonError;
use crate::stores::clock::now_micros;
use crate::types::db::item;
use crate::types::db::person::{self, ActiveModel, Entity as Person};

/// Repository for person records
#[derive(Debug, Default)]
pub struct PersonStore;

impl PersonStore {
    pub fn new() -> Self {
        Self
    }

    /// Insert a new person, stamping `created`
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored person with its generated id
    /// * `Err(InternalError)` - Empty first or last name, or database error
    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
    ) -> Result<person::Model, InternalError> {
        let firstname = firstname.into();
        let lastname = lastname.into();
        if firstname.trim().is_empty() {
            return Err(InternalError::validation("firstname", "must not be empty"));
        }
        if lastname.trim().is_empty() {
            return Err(InternalError::validation("lastname", "must not be empty"));
        }

        let model = ActiveModel {
            id: NotSet,
            firstname: Set(firstname),
            lastname: Set(lastname),
            created: Set(now_micros()),
        };

        let created = model
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("create_person", e))?;

        tracing::debug!(person_id = created.id, "Person created");

        Ok(created)
    }

    pub async fn find(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> Result<Option<person::Model>, InternalError> {
        Person::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_person", e))
    }

    /// Get a person by id, failing with `PersonError::NotFound` when absent
    pub async fn get(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> Result<person::Model, InternalError> {
        self.find(conn, id)
            .await?
            .ok_or_else(|| PersonError::NotFound(id).into())
    }

    /// List people, most recently created first
    pub async fn list(
        &self,
        conn: &impl ConnectionTrait,
    ) -> Result<Vec<person::Model>, InternalError> {
        Person::find()
            .order_by_desc(person::Column::Created)
            .order_by_desc(person::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_people", e))
    }

    /// Number of items currently held by the person
    pub async fn count_items(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> Result<u64, InternalError> {
        item::Entity::find()
            .filter(item::Column::PersonId.eq(id))
            .count(conn)
            .await
            .map_err(|e| InternalError::database("count_person_items", e))
    }

    /// Load the people with the given ids, keyed by id
    ///
    /// Ids with no matching row are absent from the map.
    pub async fn find_many(
        &self,
        conn: &impl ConnectionTrait,
        ids: &[i32],
    ) -> Result<HashMap<i32, person::Model>, InternalError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let people = Person::find()
            .filter(person::Column::Id.is_in(ids.iter().copied()))
            .all(conn)
            .await
            .map_err(|e| InternalError::database("find_people", e))?;

        Ok(people.into_iter().map(|p| (p.id, p)).collect())
    }

    /// Item counts for several people in one grouped query
    ///
    /// People holding nothing are absent from the map.
    pub async fn count_items_by_person(
        &self,
        conn: &impl ConnectionTrait,
        ids: &[i32],
    ) -> Result<HashMap<i32, u64>, InternalError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts: Vec<(i32, i64)> = item::Entity::find()
            .select_only()
            .column(item::Column::PersonId)
            .column_as(Expr::col(item::Column::Id).count(), "n_items")
            .filter(item::Column::PersonId.is_in(ids.iter().copied()))
            .group_by(item::Column::PersonId)
            .into_tuple()
            .all(conn)
            .await
            .map_err(|e| InternalError::database("count_items_by_person", e))?;

        Ok(counts
            .into_iter()
            .map(|(person_id, n_items)| (person_id, n_items.max(0) as u64))
            .collect())
    }

    /// Remove a person, releasing every item they hold
    ///
    /// Items are kept; their `person_id` is cleared and `updated` refreshed.
    /// Both steps run in one transaction.
    pub async fn delete<C>(&self, conn: &C, id: i32) -> Result<(), InternalError>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let txn = conn
            .begin()
            .await
            .map_err(InternalError::transaction_begin)?;

        if self.find(&txn, id).await?.is_none() {
            return Err(PersonError::NotFound(id).into());
        }

        let released = item::Entity::update_many()
            .col_expr(item::Column::PersonId, Expr::value(Option::<i32>::None))
            .col_expr(item::Column::Updated, Expr::value(now_micros()))
            .filter(item::Column::PersonId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| InternalError::database("release_person_items", e))?;

        Person::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| InternalError::database("delete_person", e))?;

        txn.commit()
            .await
            .map_err(InternalError::transaction_commit)?;

        tracing::debug!(
            person_id = id,
            released_items = released.rows_affected,
            "Person deleted"
        );

        Ok(())
    }
}
