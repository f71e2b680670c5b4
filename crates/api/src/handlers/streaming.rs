//! Handlers for the `/streaming` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use movieflix_core::error::CoreError;
use movieflix_core::types::DbId;
use movieflix_core::validation::validate_request;
use movieflix_db::models::streaming::{CreateStreaming, Streaming};
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Request body for `POST /streaming`.
#[derive(Debug, Deserialize, Validate)]
pub struct StreamingRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Streaming service name is required."))]
    pub name: String,
}

/// GET /movieflix/streaming
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Streaming>>> {
    Ok(Json(state.streamings.find_all().await?))
}

/// POST /movieflix/streaming
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<StreamingRequest>,
) -> AppResult<(StatusCode, Json<Streaming>)> {
    validate_request(&input)?;

    let streaming = state
        .streamings
        .save(&CreateStreaming { name: input.name })
        .await?;

    tracing::info!(
        streaming_id = streaming.id,
        user_id = auth.user_id,
        "Streaming service created"
    );

    Ok((StatusCode::CREATED, Json(streaming)))
}

/// GET /movieflix/streaming/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Streaming>> {
    let streaming = state
        .streamings
        .find_by_id(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Streaming",
            id,
        }))?;

    Ok(Json(streaming))
}

/// DELETE /movieflix/streaming/{id}
///
/// Always 204. Associated movies keep existing without this service.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.streamings.delete_by_id(id).await?;

    tracing::info!(streaming_id = id, user_id = auth.user_id, "Streaming service deleted");

    Ok(StatusCode::NO_CONTENT)
}
