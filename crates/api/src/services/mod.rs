//! Domain services.
//!
//! Each service is a cheap-to-clone struct built with its collaborators
//! passed to `new`. [`crate::state::AppState::new`] does the wiring.
//!
//! - [`category::CategoryService`] / [`streaming::StreamingService`] -- catalog lookups.
//! - [`movie::MovieService`] -- movie persistence with association reconciliation.
//! - [`user::UserService`] -- registration and credential checks.

pub mod category;
pub mod movie;
pub mod streaming;
pub mod user;

pub use category::CategoryService;
pub use movie::MovieService;
pub use streaming::StreamingService;
pub use user::UserService;
