use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Unknown e-mail or a password that does not verify against the stored hash.
    ///
    /// Both cases share one message so the response does not reveal which e-mail
    /// addresses are registered. Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration with an e-mail address that already has an account.
    ///
    /// Results in a 409 Conflict response.
    #[error("Email address is already registered")]
    EmailTaken,

    /// Registration with an e-mail address that fails format validation.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid email address")]
    InvalidEmail,

    /// Registration with an empty password.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Password must not be empty")]
    EmptyPassword,

    /// Argon2 failed to produce a hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message.
    #[error("Failed to hash password: {0}")]
    Hashing(String),
}

/// Converts authentication errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidEmail` and `EmptyPassword`
/// - 401 Unauthorized - For `InvalidCredentials`
/// - 409 Conflict - For `EmailTaken`
/// - 500 Internal Server Error - For `Hashing`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::EmailTaken => StatusCode::CONFLICT,
            Self::InvalidEmail | Self::EmptyPassword => StatusCode::BAD_REQUEST,
            Self::Hashing(_) => {
                tracing::error!("{}", self);
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response();
            }
        };

        tracing::debug!("Authentication error: {}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
