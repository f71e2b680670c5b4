//! Handlers for the `/category` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use movieflix_core::error::CoreError;
use movieflix_core::types::DbId;
use movieflix_core::validation::validate_request;
use movieflix_db::models::category::{Category, CreateCategory};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /category`.
#[derive(Debug, Deserialize, Validate)]
pub struct CategoryRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Category name is required."))]
    pub name: String,
}

/// GET /movieflix/category
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.categories.find_all().await?))
}

/// POST /movieflix/category
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CategoryRequest>,
) -> AppResult<(StatusCode, Json<Category>)> {
    validate_request(&input)?;

    let category = state
        .categories
        .save(&CreateCategory { name: input.name })
        .await?;

    tracing::info!(category_id = category.id, user_id = auth.user_id, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /movieflix/category/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = state
        .categories
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;

    Ok(Json(category))
}

/// DELETE /movieflix/category/{id}
///
/// Always 204, whether or not the category existed. Movies that referenced it
/// stay; only their association rows go.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.categories.delete_by_id(id).await?;

    tracing::info!(category_id = id, user_id = auth.user_id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
