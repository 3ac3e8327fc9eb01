//! Schema DDL: the people and contacts tables and the cascading foreign key.
//! Idempotent; run once at startup before serving.

use crate::error::ApiError;
use sqlx::PgPool;

pub async fn apply_migrations(pool: &PgPool) -> Result<(), ApiError> {
    // CREATE TYPE has no IF NOT EXISTS; a rerun fails and is ignored.
    let _ = sqlx::query("CREATE TYPE contact_type AS ENUM ('phone', 'email')")
        .execute(pool)
        .await;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id UUID PRIMARY KEY,
            name VARCHAR(200) NOT NULL,
            deleted_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contacts (
            id UUID PRIMARY KEY,
            contact_type contact_type NOT NULL,
            value VARCHAR(200) NOT NULL,
            person_id UUID REFERENCES people (id) ON DELETE CASCADE,
            deleted_at TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS contacts_person_id_idx ON contacts (person_id)")
        .execute(pool)
        .await?;

    Ok(())
}
