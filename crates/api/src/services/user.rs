use movieflix_core::error::CoreError;
use movieflix_db::models::user::{CreateUser, User};
use movieflix_db::repositories::UserRepo;
use movieflix_db::DbPool;

use crate::auth::password::{check_credentials, hash_password};
use crate::error::{AppError, AppResult};

/// Message returned for every failed login, whatever the cause.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

const EMAIL_CONSTRAINT: &str = "uq_users_email";

/// Registration and credential checks.
#[derive(Clone)]
pub struct UserService {
    pool: DbPool,
}

impl UserService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Hash the password and persist a new user.
    ///
    /// A taken email fails with [`CoreError::Conflict`].
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AppResult<User> {
        let password_hash = hash_password(password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let input = CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        };
        match UserRepo::create(&self.pool, &input).await {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.constraint() == Some(EMAIL_CONSTRAINT) => {
                Err(AppError::Core(CoreError::Conflict(format!(
                    "Email {email} is already registered"
                ))))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Return the user owning `email` if `password` matches.
    ///
    /// Unknown email and wrong password fail with the same
    /// [`CoreError::Unauthorized`] and the same message.
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let user = UserRepo::find_by_email(&self.pool, email).await?;

        let valid = check_credentials(password, user.as_ref().map(|u| u.password_hash.as_str()))
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

        match user {
            Some(user) if valid => Ok(user),
            _ => {
                tracing::warn!("Failed login attempt");
                Err(AppError::Core(CoreError::Unauthorized(
                    INVALID_CREDENTIALS.into(),
                )))
            }
        }
    }
}
