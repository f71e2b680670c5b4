//! Request handlers for the MovieFlix resources.
//!
//! Each submodule owns the request/response shapes for one resource and
//! delegates to the matching service on [`AppState`](crate::state::AppState).
//! Errors are mapped to HTTP responses via [`AppError`](crate::error::AppError).

pub mod auth;
pub mod category;
pub mod movie;
pub mod streaming;
