use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        city::{AddUserCityDto, UserCityDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::AppError,
        model::city::AddUserCityParam,
        service::city::CityService,
        state::AppState,
    },
};

/// Tag for grouping city endpoints in OpenAPI documentation
pub static CITY_TAG: &str = "city";

/// Get a user's city list.
///
/// # Arguments
/// - `state` - Application state containing the connection manager
/// - `user_id` - Owner of the list
///
/// # Returns
/// - `200 OK` - The user's cities, empty array if none
/// - `400 Bad Request` - User ID is not an integer
/// - `500 Internal Server Error` - Database unavailable or query failed
#[utoipa::path(
    get,
    path = "/api/users/{id}/cities",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User's cities", body = Vec<UserCityDto>),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_cities(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.connections.acquire().await?;
    let service = CityService::new(&db);

    let cities = service.get_user_cities(user_id).await?;

    let cities: Vec<UserCityDto> = cities.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(cities)))
}

/// Add a city to a user's list by name.
///
/// Creates the catalog city when the name is new.
///
/// # Returns
/// - `201 Created` - City added
/// - `400 Bad Request` - Invalid user ID or malformed body
/// - `500 Internal Server Error` - Database error, including a city already on the list
#[utoipa::path(
    post,
    path = "/api/users/{id}/cities",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = AddUserCityDto,
    responses(
        (status = 201, description = "City added", body = MessageDto),
        (status = 400, description = "Invalid user ID or request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user_city(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<AddUserCityDto>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.connections.acquire().await?;
    let service = CityService::new(&db);

    service
        .add_user_city(AddUserCityParam::from_dto(user_id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("City added successfully")),
    ))
}

/// Remove a city from a user's list by name.
///
/// The catalog city is deleted as well once no user lists it anymore.
///
/// # Returns
/// - `200 OK` - City removed
/// - `400 Bad Request` - Invalid user ID
/// - `404 Not Found` - No catalog city has that name
/// - `500 Internal Server Error` - Database error; nothing was deleted
#[utoipa::path(
    delete,
    path = "/api/users/{id}/cities/name/{city_name}",
    tag = CITY_TAG,
    params(
        ("id" = i32, Path, description = "User ID"),
        ("city_name" = String, Path, description = "Catalog city name")
    ),
    responses(
        (status = 200, description = "City removed", body = MessageDto),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user_city_by_name(
    State(state): State<AppState>,
    ApiPath((user_id, city_name)): ApiPath<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.connections.acquire().await?;
    let service = CityService::new(&db);

    service.delete_user_city_by_name(user_id, &city_name).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("City deleted"))))
}
