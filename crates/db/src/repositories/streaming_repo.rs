//! Repository for the `streaming` table.

use movieflix_core::types::DbId;
use sqlx::PgPool;

use crate::models::streaming::{CreateStreaming, Streaming};

/// Column list for streaming queries.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for streaming services.
pub struct StreamingRepo;

impl StreamingRepo {
    /// List all streaming services, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Streaming>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM streaming ORDER BY id");
        sqlx::query_as::<_, Streaming>(&query).fetch_all(pool).await
    }

    /// Find a streaming service by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Streaming>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM streaming WHERE id = $1");
        sqlx::query_as::<_, Streaming>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new streaming service, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStreaming) -> Result<Streaming, sqlx::Error> {
        let query = format!("INSERT INTO streaming (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Streaming>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Delete a streaming service by ID. Returns `true` if a row was deleted.
    ///
    /// Junction rows in `movie_streaming` go with it (`ON DELETE CASCADE`).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM streaming WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
