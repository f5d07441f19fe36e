use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        clothing::{
            AddClothingChoicesDto, ClothingChoiceDto, ClothingItemDto, SuggestionDto,
            SuggestionRequestDto,
        },
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::AppError,
        model::clothing::CreateClothingChoicesParam,
        service::{clothing::ClothingService, suggestion},
        state::AppState,
    },
};

/// Tag for grouping clothing endpoints in OpenAPI documentation
pub static CLOTHING_TAG: &str = "clothing";

/// Get the clothing catalog.
///
/// # Returns
/// - `200 OK` - Every clothing item ordered by category, then name
/// - `500 Internal Server Error` - Database unavailable or query failed
#[utoipa::path(
    get,
    path = "/api/clothing_items",
    tag = CLOTHING_TAG,
    responses(
        (status = 200, description = "Clothing catalog", body = Vec<ClothingItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clothing_items(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.connections.acquire().await?;
    let service = ClothingService::new(&db);

    let items = service.get_items().await?;

    let items: Vec<ClothingItemDto> = items.into_iter().map(|i| i.into_dto()).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// Get a user's clothing choice history.
///
/// # Returns
/// - `200 OK` - Choices, newest date first
/// - `400 Bad Request` - User ID is not an integer
/// - `500 Internal Server Error` - Database unavailable or query failed
#[utoipa::path(
    get,
    path = "/api/users/{id}/clothing_choices",
    tag = CLOTHING_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Clothing choice history", body = Vec<ClothingChoiceDto>),
        (status = 400, description = "Invalid user ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_clothing_choices(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let db = state.connections.acquire().await?;
    let service = ClothingService::new(&db);

    let choices = service.get_choices(user_id).await?;

    let choices: Vec<ClothingChoiceDto> = choices.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(choices)))
}

/// Store a batch of clothing choices.
///
/// All entries are written in one transaction with the top-level date, weather,
/// temperature and recommendation flag. Per-entry `is_recommended` values are accepted
/// and ignored.
///
/// # Returns
/// - `201 Created` - Every entry stored
/// - `400 Bad Request` - Invalid user ID, malformed body, or body `user_id` differs from
///   the path
/// - `500 Internal Server Error` - An insert failed; nothing was stored
#[utoipa::path(
    post,
    path = "/api/users/{id}/clothing_choices",
    tag = CLOTHING_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = AddClothingChoicesDto,
    responses(
        (status = 201, description = "Clothing choices saved", body = MessageDto),
        (status = 400, description = "Invalid user ID or request body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user_clothing_choices(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
    ApiJson(payload): ApiJson<AddClothingChoicesDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.user_id != user_id {
        return Err(AppError::BadRequest(
            "User ID in body does not match path".to_string(),
        ));
    }

    let db = state.connections.acquire().await?;
    let service = ClothingService::new(&db);

    service
        .add_choices(CreateClothingChoicesParam::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Clothing choices saved")),
    ))
}

/// Suggest an outfit for the given temperature and weather.
///
/// Suggestions come from fixed temperature bands and do not touch the database.
///
/// # Returns
/// - `200 OK` - Suggested clothing item names
/// - `400 Bad Request` - Malformed body
#[utoipa::path(
    post,
    path = "/api/suggest",
    tag = CLOTHING_TAG,
    request_body = SuggestionRequestDto,
    responses(
        (status = 200, description = "Suggested clothing items", body = SuggestionDto),
        (status = 400, description = "Invalid request body", body = ErrorDto)
    ),
)]
pub async fn suggest_clothing(
    ApiJson(payload): ApiJson<SuggestionRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let items = suggestion::suggest(payload.temp, &payload.weather)
        .into_iter()
        .map(String::from)
        .collect();

    Ok((StatusCode::OK, Json(SuggestionDto { items })))
}
