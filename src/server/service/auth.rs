//! Login and registration.

use regex::Regex;
use sea_orm::{DatabaseConnection, SqlErr};
use std::sync::LazyLock;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, LoginParam, RegisterParam, User},
    util::password::{hash_password, verify_password},
};

/// Accepted e-mail format for registration.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,4}$")
        .expect("static regex should not panic")
});

/// Service for verifying credentials and creating accounts.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies an e-mail and password pair.
    ///
    /// An unknown e-mail and a wrong password produce the same error.
    ///
    /// # Arguments
    /// - `param` - E-mail and plaintext password from the request
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials match
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown e-mail or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(&param.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Registers a new user.
    ///
    /// Validates the e-mail format and rejects empty passwords before hashing the password
    /// with Argon2id.
    ///
    /// # Arguments
    /// - `param` - E-mail and plaintext password from the request
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::AuthErr(InvalidEmail | EmptyPassword))` - Rejected input
    /// - `Err(AppError::AuthErr(EmailTaken))` - E-mail already registered
    /// - `Err(AppError::DbErr)` - Other database error during insert
    pub async fn register(&self, param: RegisterParam) -> Result<User, AppError> {
        if !EMAIL_PATTERN.is_match(&param.email) {
            return Err(AuthError::InvalidEmail.into());
        }
        if param.password.is_empty() {
            return Err(AuthError::EmptyPassword.into());
        }

        let password_hash = hash_password(&param.password)?;

        let repo = UserRepository::new(self.db);
        let result = repo
            .create(CreateUserParam {
                email: param.email,
                password_hash,
            })
            .await;

        match result {
            Ok(user) => {
                tracing::info!("Registered user {}", user.user_id);
                Ok(user)
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AuthError::EmailTaken.into()),
                _ => Err(err.into()),
            },
        }
    }
}
