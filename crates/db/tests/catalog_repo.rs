//! Integration tests for the category, streaming and user repositories.

use movieflix_db::models::category::CreateCategory;
use movieflix_db::models::streaming::CreateStreaming;
use movieflix_db::models::user::CreateUser;
use movieflix_db::repositories::{CategoryRepo, StreamingRepo, UserRepo};
use sqlx::PgPool;

fn new_category(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
    }
}

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        name: "Ana".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_crud(pool: PgPool) {
    let drama = CategoryRepo::create(&pool, &new_category("Drama")).await.unwrap();
    let horror = CategoryRepo::create(&pool, &new_category("Horror")).await.unwrap();
    assert_eq!(drama.name, "Drama");
    assert!(drama.id > 0);

    let found = CategoryRepo::find_by_id(&pool, drama.id).await.unwrap();
    assert_eq!(found, Some(drama.clone()));

    let all = CategoryRepo::list(&pool).await.unwrap();
    assert_eq!(all, vec![drama.clone(), horror.clone()]);

    assert!(CategoryRepo::delete(&pool, drama.id).await.unwrap());
    assert!(CategoryRepo::find_by_id(&pool, drama.id).await.unwrap().is_none());
    assert_eq!(CategoryRepo::list(&pool).await.unwrap(), vec![horror]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_category_reports_false(pool: PgPool) {
    assert!(!CategoryRepo::delete(&pool, 424242).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_category_name_rejected_by_schema(pool: PgPool) {
    let result = CategoryRepo::create(&pool, &new_category("")).await;
    assert!(result.is_err(), "CHECK (name <> '') must reject empty names");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_streaming_crud(pool: PgPool) {
    let input = CreateStreaming {
        name: "Netflix".to_string(),
    };
    let netflix = StreamingRepo::create(&pool, &input).await.unwrap();
    assert_eq!(netflix.name, "Netflix");

    let found = StreamingRepo::find_by_id(&pool, netflix.id).await.unwrap();
    assert_eq!(found.as_ref().map(|s| s.id), Some(netflix.id));

    assert_eq!(StreamingRepo::list(&pool).await.unwrap().len(), 1);
    assert!(StreamingRepo::delete(&pool, netflix.id).await.unwrap());
    assert!(StreamingRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_lookup_by_email(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("ana@example.com")).await.unwrap();

    let by_email = UserRepo::find_by_email(&pool, "ana@example.com").await.unwrap().unwrap();
    assert_eq!(by_email.id, user.id);

    assert_eq!(by_email.name, user.name);
    assert_eq!(by_email.password_hash, user.password_hash);

    assert!(UserRepo::find_by_email(&pool, "nobody@example.com").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_email_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup@example.com")).await.unwrap();
    let err = UserRepo::create(&pool, &new_user("dup@example.com")).await.unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected a unique violation, got {other:?}"),
    }
}
