//! Streaming service model.

use movieflix_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `streaming` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Streaming {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new streaming service.
#[derive(Debug, Clone)]
pub struct CreateStreaming {
    pub name: String,
}
