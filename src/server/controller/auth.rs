use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, CredentialsDto},
    },
    server::{
        controller::extract::ApiJson,
        error::AppError,
        model::user::{LoginParam, RegisterParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with e-mail and password.
///
/// Verifies the password against the stored Argon2 hash. No token or session is issued;
/// the client keeps the returned user ID.
///
/// # Arguments
/// - `state` - Application state containing the connection manager
/// - `payload` - E-mail and password
///
/// # Returns
/// - `200 OK` - Credentials match; body carries the user ID as a string
/// - `400 Bad Request` - Malformed JSON body
/// - `401 Unauthorized` - Unknown e-mail or wrong password
/// - `500 Internal Server Error` - Database unavailable or query failed
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 200, description = "Login successful", body = AuthResponseDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.connections.acquire().await?;
    let service = AuthService::new(&db);

    let user = service.login(LoginParam::from_dto(payload)).await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            user_id: user.user_id,
            message: "Login successful".to_string(),
        }),
    ))
}

/// Register a new account.
///
/// # Returns
/// - `201 Created` - Account created; body carries the new user ID as a string
/// - `400 Bad Request` - Malformed body, invalid e-mail format or empty password
/// - `409 Conflict` - E-mail already registered
/// - `500 Internal Server Error` - Database unavailable or insert failed
#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    request_body = CredentialsDto,
    responses(
        (status = 201, description = "User registered", body = AuthResponseDto),
        (status = 400, description = "Invalid e-mail, empty password or malformed body", body = ErrorDto),
        (status = 409, description = "E-mail already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CredentialsDto>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.connections.acquire().await?;
    let service = AuthService::new(&db);

    let user = service.register(RegisterParam::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            user_id: user.user_id,
            message: "User registered successfully".to_string(),
        }),
    ))
}
