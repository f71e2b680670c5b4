//! Service-level tests for association reconciliation and update semantics.

use assert_matches::assert_matches;
use movieflix_api::error::AppError;
use movieflix_api::services::{CategoryService, MovieService, StreamingService, UserService};
use movieflix_core::error::CoreError;
use movieflix_db::models::category::CreateCategory;
use movieflix_db::models::movie::CreateMovie;
use movieflix_db::models::streaming::CreateStreaming;
use movieflix_db::repositories::MovieRepo;
use sqlx::PgPool;

fn services(pool: &PgPool) -> (CategoryService, StreamingService, MovieService) {
    let categories = CategoryService::new(pool.clone());
    let streamings = StreamingService::new(pool.clone());
    let movies = MovieService::new(pool.clone(), categories.clone(), streamings.clone());
    (categories, streamings, movies)
}

fn movie(title: &str, category_ids: Vec<i64>, streaming_ids: Vec<i64>) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        description: None,
        release_date: None,
        rating: 7.0,
        category_ids,
        streaming_ids,
    }
}

async fn category(service: &CategoryService, name: &str) -> i64 {
    service
        .save(&CreateCategory { name: name.into() })
        .await
        .unwrap()
        .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_keeps_existing_ids_only(pool: PgPool) {
    let (categories, streamings, movies) = services(&pool);
    let drama = category(&categories, "Drama").await;
    let netflix = streamings
        .save(&CreateStreaming { name: "Netflix".into() })
        .await
        .unwrap()
        .id;

    let saved = movies
        .save(&movie("Kept", vec![404, drama, drama], vec![netflix, 405]))
        .await
        .unwrap();

    assert!(saved.movie.id > 0);
    assert_eq!(saved.categories.iter().map(|c| c.id).collect::<Vec<_>>(), vec![drama]);
    assert_eq!(saved.streamings.iter().map(|s| s.id).collect::<Vec<_>>(), vec![netflix]);

    let found = movies.find_by_id(saved.movie.id).await.unwrap();
    assert_eq!(found, Some(saved));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_id_mutates_nothing(pool: PgPool) {
    let (categories, _, movies) = services(&pool);
    let drama = category(&categories, "Drama").await;
    let existing = movies.save(&movie("Existing", vec![drama], vec![])).await.unwrap();

    let result = movies
        .update(existing.movie.id + 1000, &movie("Ghost", vec![drama], vec![]))
        .await
        .unwrap();
    assert_matches!(result, None);

    let all = movies.find_all().await.unwrap();
    assert_eq!(all, vec![existing]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_with_mixed_ids(pool: PgPool) {
    let (categories, _, movies) = services(&pool);
    let drama = category(&categories, "Drama").await;
    let comedy = category(&categories, "Comedy").await;
    let saved = movies.save(&movie("Mixed", vec![drama], vec![])).await.unwrap();

    let updated = movies
        .update(saved.movie.id, &movie("Mixed", vec![comedy, 9999], vec![]))
        .await
        .unwrap()
        .expect("movie exists");

    assert_eq!(updated.categories.len(), 1);
    assert_eq!(updated.categories[0].id, comedy);
    assert!(updated.movie.updated_at >= saved.movie.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_category_matches_associations(pool: PgPool) {
    let (categories, _, movies) = services(&pool);
    let drama = category(&categories, "Drama").await;
    let comedy = category(&categories, "Comedy").await;

    let a = movies.save(&movie("A", vec![drama], vec![])).await.unwrap();
    movies.save(&movie("B", vec![comedy], vec![])).await.unwrap();
    movies.save(&movie("C", vec![], vec![])).await.unwrap();

    let found = movies.find_by_category(drama).await.unwrap();
    assert_eq!(found, vec![a]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_join_rows(pool: PgPool) {
    let (categories, _, movies) = services(&pool);
    let drama = category(&categories, "Drama").await;
    let saved = movies.save(&movie("Gone", vec![drama], vec![])).await.unwrap();

    movies.delete_by_id(saved.movie.id).await.unwrap();

    assert_matches!(movies.find_by_id(saved.movie.id).await, Ok(None));
    assert!(MovieRepo::list_by_category(&pool, drama).await.unwrap().is_empty());
    assert!(categories.find_by_id(drama).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_authenticate_failures_are_identical(pool: PgPool) {
    let users = UserService::new(pool);
    users.register("Ana", "ana@test.com", "hunter22").await.unwrap();

    let ok = users.authenticate("ana@test.com", "hunter22").await.unwrap();
    assert_eq!(ok.email, "ana@test.com");

    let wrong_password = users.authenticate("ana@test.com", "nope").await;
    let unknown_email = users.authenticate("ghost@test.com", "hunter22").await;

    assert_matches!(
        wrong_password,
        Err(AppError::Core(CoreError::Unauthorized(ref msg))) if msg == "Invalid email or password"
    );
    assert_matches!(
        unknown_email,
        Err(AppError::Core(CoreError::Unauthorized(ref msg))) if msg == "Invalid email or password"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_duplicate_email_is_conflict(pool: PgPool) {
    let users = UserService::new(pool);
    users.register("Ana", "ana@test.com", "pw").await.unwrap();

    let err = users.register("Other", "ana@test.com", "pw").await.unwrap_err();
    assert_matches!(
        err,
        AppError::Core(CoreError::Conflict(ref msg)) if msg == "Email ana@test.com is already registered"
    );
}
