//! Person persistence: list, fetch, create, replace, delete against PostgreSQL.

use crate::error::ApiError;
use crate::model::Person;
use crate::service::ContactService;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct PersonRow {
    id: Uuid,
    name: String,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person::with_id(row.id, row.name)
    }
}

pub struct PeopleService;

impl PeopleService {
    /// All people with their contacts, no pagination. Contacts are
    /// batch-loaded with a single `ANY($1)` query and grouped by owner.
    pub async fn list(pool: &PgPool) -> Result<Vec<Person>, ApiError> {
        let rows: Vec<PersonRow> = sqlx::query_as("SELECT id, name FROM people ORDER BY id")
            .fetch_all(pool)
            .await?;
        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut people: Vec<Person> = rows.into_iter().map(Person::from).collect();

        let mut by_owner: HashMap<Uuid, Vec<_>> = HashMap::new();
        for contact in ContactService::list_by_owner(pool, &ids).await? {
            if let Some(owner) = contact.person_id() {
                by_owner.entry(owner).or_default().push(contact);
            }
        }
        for person in &mut people {
            for contact in by_owner.remove(&person.id()).unwrap_or_default() {
                person.attach_contact(contact);
            }
        }
        Ok(people)
    }

    /// One person by id, contacts populated.
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Person>, ApiError> {
        let row: Option<PersonRow> = sqlx::query_as("SELECT id, name FROM people WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let mut person = Person::from(row);
        for contact in ContactService::list_by_owner(pool, &[id]).await? {
            person.attach_contact(contact);
        }
        Ok(Some(person))
    }

    /// Insert a new row. Returns the affected-row count.
    pub async fn create(pool: &PgPool, person: &Person) -> Result<u64, ApiError> {
        tracing::debug!(id = %person.id(), "insert person");
        let result = sqlx::query("INSERT INTO people (id, name) VALUES ($1, $2)")
            .bind(person.id())
            .bind(person.name())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Replace the stored row's fields (name only; contacts are untouched by
    /// this operation). Fails with `NotFound` when the id does not resolve.
    pub async fn update(pool: &PgPool, replacement: &Person) -> Result<u64, ApiError> {
        if !Self::exists(pool, replacement.id()).await? {
            return Err(ApiError::NotFound);
        }
        tracing::debug!(id = %replacement.id(), "update person");
        let result = sqlx::query("UPDATE people SET name = $1 WHERE id = $2")
            .bind(replacement.name())
            .bind(replacement.id())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete the row; contacts referencing it go with it through the
    /// cascading foreign key. Fails with `NotFound` when the id does not
    /// resolve.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, ApiError> {
        if !Self::exists(pool, id).await? {
            return Err(ApiError::NotFound);
        }
        tracing::debug!(id = %id, "delete person");
        let result = sqlx::query("DELETE FROM people WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub(crate) async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM people WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists.0)
    }
}
