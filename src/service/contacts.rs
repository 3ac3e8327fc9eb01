//! Contact persistence: fetch, create under a person, replace, delete.

use crate::error::ApiError;
use crate::model::{Contact, ContactType};
use crate::service::PeopleService;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct ContactRow {
    id: Uuid,
    contact_type: ContactType,
    value: String,
    person_id: Option<Uuid>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Contact::from_store(row.id, row.contact_type, row.value, row.person_id)
    }
}

pub struct ContactService;

impl ContactService {
    /// One contact by id.
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<Option<Contact>, ApiError> {
        let row: Option<ContactRow> = sqlx::query_as(
            "SELECT id, contact_type, value, person_id FROM contacts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(Contact::from))
    }

    /// Contacts owned by any of the given people.
    pub(crate) async fn list_by_owner(
        pool: &PgPool,
        owner_ids: &[Uuid],
    ) -> Result<Vec<Contact>, ApiError> {
        if owner_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows: Vec<ContactRow> = sqlx::query_as(
            "SELECT id, contact_type, value, person_id FROM contacts \
             WHERE person_id = ANY($1) ORDER BY id",
        )
        .bind(owner_ids)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(Contact::from).collect())
    }

    /// Insert a new contact owned by `person_id`. Fails with `BadRequest`
    /// when the person does not resolve; nothing is written in that case.
    pub async fn create(
        pool: &PgPool,
        person_id: Uuid,
        contact: &Contact,
    ) -> Result<u64, ApiError> {
        if !PeopleService::exists(pool, person_id).await? {
            return Err(ApiError::BadRequest(format!(
                "person '{}' does not exist",
                person_id
            )));
        }
        tracing::debug!(id = %contact.id(), person = %person_id, "insert contact");
        let result = sqlx::query(
            "INSERT INTO contacts (id, contact_type, value, person_id) VALUES ($1, $2, $3, $4)",
        )
        .bind(contact.id())
        .bind(contact.contact_type())
        .bind(contact.value())
        .bind(person_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Replace type and value; the owner link is untouched. Fails with
    /// `NotFound` when the id does not resolve.
    pub async fn update(pool: &PgPool, replacement: &Contact) -> Result<u64, ApiError> {
        if !Self::exists(pool, replacement.id()).await? {
            return Err(ApiError::NotFound);
        }
        tracing::debug!(id = %replacement.id(), "update contact");
        let result = sqlx::query("UPDATE contacts SET contact_type = $1, value = $2 WHERE id = $3")
            .bind(replacement.contact_type())
            .bind(replacement.value())
            .bind(replacement.id())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete the row. Fails with `NotFound` when the id does not resolve.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, ApiError> {
        if !Self::exists(pool, id).await? {
            return Err(ApiError::NotFound);
        }
        tracing::debug!(id = %id, "delete contact");
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn exists(pool: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM contacts WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(exists.0)
    }
}
