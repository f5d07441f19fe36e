use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        location::{LocationDto, PostLocationDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::AppError,
        model::location::CreateLocationParam,
        service::location::LocationService,
        state::AppState,
    },
};

/// Tag for grouping location endpoints in OpenAPI documentation
pub static LOCATION_TAG: &str = "location";

/// Log the user's current location.
///
/// The timestamp is assigned by the server; any timestamp in the body is ignored.
///
/// # Returns
/// - `201 Created` - Location stored
/// - `400 Bad Request` - Invalid user ID or malformed body
/// - `500 Internal Server Error` - Database error, including an unknown user
#[utoipa::path(
    post,
    path = "/api/users/{id}/locations",
    tag = LOCATION_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = PostLocationDto,
    responses(
        (status = 201, description = "Location saved", body = MessageDto),
        (status = 400, description = "Invalid user ID or request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_user_location(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<PostLocationDto>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.connections.acquire().await?;
    let service = LocationService::new(&db);

    service
        .create(CreateLocationParam::from_dto(user_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::new("Location saved"))))
}

/// Get the user's most recently logged location.
///
/// # Returns
/// - `200 OK` - Latest location
/// - `400 Bad Request` - Invalid user ID
/// - `404 Not Found` - The user has no logged location
/// - `500 Internal Server Error` - Database unavailable or query failed
#[utoipa::path(
    get,
    path = "/api/users/{id}/locations/latest",
    tag = LOCATION_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Latest location", body = LocationDto),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_user_location(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.connections.acquire().await?;
    let service = LocationService::new(&db);

    let location = service
        .get_latest(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

    Ok((StatusCode::OK, Json(location.into_dto())))
}
