//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Writes that must share a
//! transaction take `&mut PgConnection` instead.

pub mod category_repo;
pub mod movie_repo;
pub mod streaming_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use movie_repo::MovieRepo;
pub use streaming_repo::StreamingRepo;
pub use user_repo::UserRepo;
