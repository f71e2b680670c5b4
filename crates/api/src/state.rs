use std::sync::Arc;

use crate::auth::token::TokenService;
use crate::config::ServerConfig;
use crate::services::{CategoryService, MovieService, StreamingService, UserService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: movieflix_db::DbPool,
    pub config: Arc<ServerConfig>,
    pub tokens: TokenService,
    pub categories: CategoryService,
    pub streamings: StreamingService,
    pub movies: MovieService,
    pub users: UserService,
}

impl AppState {
    /// Wire every service from the pool and configuration.
    pub fn new(pool: movieflix_db::DbPool, config: ServerConfig) -> Self {
        let categories = CategoryService::new(pool.clone());
        let streamings = StreamingService::new(pool.clone());
        let movies = MovieService::new(pool.clone(), categories.clone(), streamings.clone());

        Self {
            tokens: TokenService::new(&config.token),
            users: UserService::new(pool.clone()),
            config: Arc::new(config),
            categories,
            streamings,
            movies,
            pool,
        }
    }
}
