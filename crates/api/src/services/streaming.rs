use movieflix_core::types::DbId;
use movieflix_db::models::streaming::{CreateStreaming, Streaming};
use movieflix_db::repositories::StreamingRepo;
use movieflix_db::DbPool;

/// Streaming service lookups and writes.
#[derive(Clone)]
pub struct StreamingService {
    pool: DbPool,
}

impl StreamingService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> Result<Vec<Streaming>, sqlx::Error> {
        StreamingRepo::list(&self.pool).await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<Streaming>, sqlx::Error> {
        StreamingRepo::find_by_id(&self.pool, id).await
    }

    /// Persist a streaming service. Name validation happens at the transport boundary.
    pub async fn save(&self, input: &CreateStreaming) -> Result<Streaming, sqlx::Error> {
        StreamingRepo::create(&self.pool, input).await
    }

    /// Delete unconditionally; deleting a missing id is not an error.
    pub async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        let deleted = StreamingRepo::delete(&self.pool, id).await?;
        tracing::debug!(streaming_id = id, deleted, "Streaming delete");
        Ok(())
    }
}
