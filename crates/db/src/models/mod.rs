//! Row models and DTOs, one module per table.

pub mod category;
pub mod movie;
pub mod streaming;
pub mod user;
