//! Repository for the `movie` table and its `movie_category` /
//! `movie_streaming` junction tables.

use std::collections::HashMap;

use movieflix_core::types::DbId;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::models::category::Category;
use crate::models::movie::{CreateMovie, Movie, MovieWithAssociations};
use crate::models::streaming::Streaming;

/// Column list for the `movie` table.
const COLUMNS: &str = "id, title, description, release_date, rating, created_at, updated_at";

/// `movie` columns qualified with the `m` alias, for JOIN queries.
const MOVIE_COLUMNS: &str =
    "m.id, m.title, m.description, m.release_date, m.rating, m.created_at, m.updated_at";

/// Junction row joined with the category it points at.
#[derive(FromRow)]
struct MovieCategoryRow {
    movie_id: DbId,
    #[sqlx(flatten)]
    category: Category,
}

/// Junction row joined with the streaming service it points at.
#[derive(FromRow)]
struct MovieStreamingRow {
    movie_id: DbId,
    #[sqlx(flatten)]
    streaming: Streaming,
}

/// Provides CRUD operations for movies and their association rows.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a movie row. Junction rows are written separately via
    /// [`MovieRepo::replace_categories`] and [`MovieRepo::replace_streamings`].
    pub async fn create(conn: &mut PgConnection, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie (title, description, release_date, rating)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_date)
            .bind(input.rating)
            .fetch_one(&mut *conn)
            .await
    }

    /// Overwrite every scalar field of a movie.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &CreateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movie SET
                title = $2,
                description = $3,
                release_date = $4,
                rating = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_date)
            .bind(input.rating)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all movies, ordered by id.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// List the movies associated with a category, ordered by id.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!(
            "SELECT {MOVIE_COLUMNS}
             FROM movie m
             JOIN movie_category mc ON mc.movie_id = m.id
             WHERE mc.category_id = $1
             ORDER BY m.id"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movie WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Association helpers
    // -----------------------------------------------------------------------

    /// Replace all category associations of a movie.
    ///
    /// Deletes existing junction rows, then inserts one per id. Ids must
    /// already be known to exist; a missing category is a foreign key error.
    pub async fn replace_categories(
        conn: &mut PgConnection,
        movie_id: DbId,
        category_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM movie_category WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut *conn)
            .await?;

        for &category_id in category_ids {
            sqlx::query(
                "INSERT INTO movie_category (movie_id, category_id) VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(movie_id)
            .bind(category_id)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }

    /// Replace all streaming associations of a movie.
    pub async fn replace_streamings(
        conn: &mut PgConnection,
        movie_id: DbId,
        streaming_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM movie_streaming WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut *conn)
            .await?;

        for &streaming_id in streaming_ids {
            sqlx::query(
                "INSERT INTO movie_streaming (movie_id, streaming_id) VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(movie_id)
            .bind(streaming_id)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }

    /// Attach categories and streaming services to a batch of movies.
    ///
    /// Issues one query per junction table regardless of batch size. Input
    /// order is preserved.
    pub async fn with_associations(
        pool: &PgPool,
        movies: Vec<Movie>,
    ) -> Result<Vec<MovieWithAssociations>, sqlx::Error> {
        if movies.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = movies.iter().map(|m| m.id).collect();

        let category_rows = sqlx::query_as::<_, MovieCategoryRow>(
            "SELECT mc.movie_id, c.id, c.name, c.created_at, c.updated_at
             FROM movie_category mc
             JOIN category c ON c.id = mc.category_id
             WHERE mc.movie_id = ANY($1)
             ORDER BY c.id",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let streaming_rows = sqlx::query_as::<_, MovieStreamingRow>(
            "SELECT ms.movie_id, s.id, s.name, s.created_at, s.updated_at
             FROM movie_streaming ms
             JOIN streaming s ON s.id = ms.streaming_id
             WHERE ms.movie_id = ANY($1)
             ORDER BY s.id",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut categories: HashMap<DbId, Vec<Category>> = HashMap::new();
        for row in category_rows {
            categories.entry(row.movie_id).or_default().push(row.category);
        }

        let mut streamings: HashMap<DbId, Vec<Streaming>> = HashMap::new();
        for row in streaming_rows {
            streamings.entry(row.movie_id).or_default().push(row.streaming);
        }

        Ok(movies
            .into_iter()
            .map(|movie| MovieWithAssociations {
                categories: categories.remove(&movie.id).unwrap_or_default(),
                streamings: streamings.remove(&movie.id).unwrap_or_default(),
                movie,
            })
            .collect())
    }

    /// Find a movie by ID, enriched with its associations.
    pub async fn find_by_id_with_associations(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MovieWithAssociations>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(movie) => Ok(Self::with_associations(pool, vec![movie]).await?.pop()),
            None => Ok(None),
        }
    }
}
