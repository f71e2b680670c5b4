//! Handlers for the `/movie` resource.
//!
//! Category and streaming ids in a request are hints: ids that do not resolve
//! are dropped by [`MovieService`](crate::services::MovieService) and the
//! response shows what was actually linked.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use movieflix_core::error::CoreError;
use movieflix_core::release_date;
use movieflix_core::types::DbId;
use movieflix_core::validation::validate_request;
use movieflix_db::models::movie::{CreateMovie, MovieWithAssociations};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /movie` and `PUT /movie/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct MovieRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Movie title is required."))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `dd/MM/yyyy` or `yyyy-MM-dd`.
    #[serde(default, deserialize_with = "release_date::deserialize_optional")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub categories: Vec<DbId>,
    #[serde(default)]
    pub streamings: Vec<DbId>,
}

impl From<MovieRequest> for CreateMovie {
    fn from(req: MovieRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            release_date: req.release_date,
            rating: req.rating,
            category_ids: req.categories,
            streaming_ids: req.streamings,
        }
    }
}

/// Query parameters for `GET /movie/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub category: Option<DbId>,
}

fn movie_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Movie", id })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /movieflix/movie
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<MovieRequest>,
) -> AppResult<(StatusCode, Json<MovieWithAssociations>)> {
    validate_request(&input)?;

    let movie = state.movies.save(&CreateMovie::from(input)).await?;

    tracing::info!(movie_id = movie.movie.id, user_id = auth.user_id, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movieflix/movie
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MovieWithAssociations>>> {
    Ok(Json(state.movies.find_all().await?))
}

/// GET /movieflix/movie/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieWithAssociations>> {
    let movie = state
        .movies
        .find_by_id(id)
        .await?
        .ok_or_else(|| movie_not_found(id))?;

    Ok(Json(movie))
}

/// PUT /movieflix/movie/{id}
///
/// Full replacement: omitted scalar fields are cleared and both association
/// lists are replaced.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<MovieRequest>,
) -> AppResult<Json<MovieWithAssociations>> {
    validate_request(&input)?;

    let movie = state
        .movies
        .update(id, &CreateMovie::from(input))
        .await?
        .ok_or_else(|| movie_not_found(id))?;

    tracing::info!(movie_id = id, user_id = auth.user_id, "Movie updated");

    Ok(Json(movie))
}

/// GET /movieflix/movie/search?category={id}
pub async fn search(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<MovieWithAssociations>>> {
    let category_id = params
        .category
        .ok_or_else(|| AppError::BadRequest("Query parameter 'category' is required".into()))?;

    Ok(Json(state.movies.find_by_category(category_id).await?))
}

/// DELETE /movieflix/movie/{id}
///
/// 404 when the movie does not exist, 204 otherwise.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if state.movies.find_by_id(id).await?.is_none() {
        return Err(movie_not_found(id));
    }

    state.movies.delete_by_id(id).await?;

    tracing::info!(movie_id = id, user_id = auth.user_id, "Movie deleted");

    Ok(StatusCode::NO_CONTENT)
}
