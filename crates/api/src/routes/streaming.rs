//! Route definitions for the `/streaming` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::streaming;
use crate::state::AppState;

/// Routes mounted at `/streaming`. Same shape as `/category`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(streaming::list).post(streaming::create))
        .route("/{id}", get(streaming::get_by_id).delete(streaming::delete))
}
