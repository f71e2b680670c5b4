//! Route definitions for the `/movie` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie;
use crate::state::AppState;

/// Routes mounted at `/movie`.
///
/// ```text
/// GET    /                     -> list
/// POST   /                     -> create
/// GET    /search?category={id} -> search
/// GET    /{id}                 -> get_by_id
/// PUT    /{id}                 -> update
/// DELETE /{id}                 -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list).post(movie::create))
        .route("/search", get(movie::search))
        .route(
            "/{id}",
            get(movie::get_by_id)
                .put(movie::update)
                .delete(movie::delete),
        )
}
