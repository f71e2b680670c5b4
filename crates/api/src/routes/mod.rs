pub mod auth;
pub mod category;
pub mod health;
pub mod movie;
pub mod streaming;

use axum::Router;

use crate::state::AppState;

/// Build the `/movieflix` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                    register (public)
/// /auth/login                       login (public)
///
/// /category                         list, create
/// /category/{id}                    get, delete
///
/// /streaming                        list, create
/// /streaming/{id}                   get, delete
///
/// /movie                            list, create
/// /movie/search?category={id}       movies in a category
/// /movie/{id}                       get, update, delete
/// ```
///
/// Everything outside `/auth` requires a bearer token.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/category", category::router())
        .nest("/streaming", streaming::router())
        .nest("/movie", movie::router())
}
