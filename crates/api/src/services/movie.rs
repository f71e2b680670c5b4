//! Movie persistence with association reconciliation.
//!
//! Requested category and streaming ids are checked against the catalog one by
//! one before anything is written. Ids that do not resolve are dropped without
//! an error, so a movie can end up with fewer associations than requested.

use movieflix_core::association::retain_existing;
use movieflix_core::types::DbId;
use movieflix_db::models::category::Category;
use movieflix_db::models::movie::{CreateMovie, MovieWithAssociations};
use movieflix_db::models::streaming::Streaming;
use movieflix_db::repositories::MovieRepo;
use movieflix_db::DbPool;

use super::{CategoryService, StreamingService};

#[derive(Clone)]
pub struct MovieService {
    pool: DbPool,
    categories: CategoryService,
    streamings: StreamingService,
}

impl MovieService {
    pub fn new(pool: DbPool, categories: CategoryService, streamings: StreamingService) -> Self {
        Self {
            pool,
            categories,
            streamings,
        }
    }

    /// Insert a movie with the subset of requested associations that exist.
    pub async fn save(&self, input: &CreateMovie) -> Result<MovieWithAssociations, sqlx::Error> {
        let categories = self.find_categories(&input.category_ids).await?;
        let streamings = self.find_streamings(&input.streaming_ids).await?;

        let mut tx = self.pool.begin().await?;
        let movie = MovieRepo::create(&mut tx, input).await?;
        MovieRepo::replace_categories(&mut tx, movie.id, &ids_of(&categories, |c| c.id)).await?;
        MovieRepo::replace_streamings(&mut tx, movie.id, &ids_of(&streamings, |s| s.id)).await?;
        tx.commit().await?;

        tracing::debug!(
            movie_id = movie.id,
            requested_categories = input.category_ids.len(),
            kept_categories = categories.len(),
            requested_streamings = input.streaming_ids.len(),
            kept_streamings = streamings.len(),
            "Movie saved",
        );

        Ok(MovieWithAssociations {
            movie,
            categories,
            streamings,
        })
    }

    pub async fn find_all(&self) -> Result<Vec<MovieWithAssociations>, sqlx::Error> {
        let movies = MovieRepo::list(&self.pool).await?;
        MovieRepo::with_associations(&self.pool, movies).await
    }

    pub async fn find_by_id(&self, id: DbId) -> Result<Option<MovieWithAssociations>, sqlx::Error> {
        MovieRepo::find_by_id_with_associations(&self.pool, id).await
    }

    pub async fn find_by_category(
        &self,
        category_id: DbId,
    ) -> Result<Vec<MovieWithAssociations>, sqlx::Error> {
        let movies = MovieRepo::list_by_category(&self.pool, category_id).await?;
        MovieRepo::with_associations(&self.pool, movies).await
    }

    /// Overwrite a movie and replace both association sets.
    ///
    /// Returns `None` without touching the store when `id` does not exist.
    pub async fn update(
        &self,
        id: DbId,
        input: &CreateMovie,
    ) -> Result<Option<MovieWithAssociations>, sqlx::Error> {
        if MovieRepo::find_by_id(&self.pool, id).await?.is_none() {
            return Ok(None);
        }

        let categories = self.find_categories(&input.category_ids).await?;
        let streamings = self.find_streamings(&input.streaming_ids).await?;

        let mut tx = self.pool.begin().await?;
        let Some(movie) = MovieRepo::update(&mut tx, id, input).await? else {
            // Deleted between the existence check and the update.
            tx.rollback().await?;
            return Ok(None);
        };
        MovieRepo::replace_categories(&mut tx, id, &ids_of(&categories, |c| c.id)).await?;
        MovieRepo::replace_streamings(&mut tx, id, &ids_of(&streamings, |s| s.id)).await?;
        tx.commit().await?;

        Ok(Some(MovieWithAssociations {
            movie,
            categories,
            streamings,
        }))
    }

    /// Remove the movie row; junction rows cascade. Existence is the caller's
    /// concern.
    pub async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        MovieRepo::delete(&self.pool, id).await?;
        Ok(())
    }

    /// Resolve category ids, sorted by id to match what a later read returns.
    async fn find_categories(&self, ids: &[DbId]) -> Result<Vec<Category>, sqlx::Error> {
        let mut found = retain_existing(ids, |id| self.categories.find_by_id(id)).await?;
        found.sort_by_key(|c| c.id);
        Ok(found)
    }

    async fn find_streamings(&self, ids: &[DbId]) -> Result<Vec<Streaming>, sqlx::Error> {
        let mut found = retain_existing(ids, |id| self.streamings.find_by_id(id)).await?;
        found.sort_by_key(|s| s.id);
        Ok(found)
    }
}

fn ids_of<T>(items: &[T], id: impl Fn(&T) -> DbId) -> Vec<DbId> {
    items.iter().map(id).collect()
}
