//! Category model.

use movieflix_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `category` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
}
