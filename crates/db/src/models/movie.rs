//! Movie entity model and DTOs.
//!
//! A movie references categories and streaming services through the
//! `movie_category` and `movie_streaming` junction tables.

use chrono::NaiveDate;
use movieflix_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::category::Category;
use super::streaming::Streaming;

/// A row from the `movie` table.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub rating: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A movie enriched with the categories and streaming services it references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieWithAssociations {
    #[serde(flatten)]
    pub movie: Movie,
    pub categories: Vec<Category>,
    pub streamings: Vec<Streaming>,
}

/// Scalar movie fields plus the requested association ids.
///
/// Used for both inserts and full updates. The ids are what the caller asked
/// for; the movie service filters them down to rows that exist before any
/// junction row is written.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateMovie {
    pub title: String,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub rating: f64,
    pub category_ids: Vec<DbId>,
    pub streaming_ids: Vec<DbId>,
}
