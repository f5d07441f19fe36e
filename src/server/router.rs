//! Route table and OpenAPI documentation.
//!
//! Routes are registered through `utoipa_axum::OpenApiRouter`, which collects the
//! `#[utoipa::path]` annotation of every handler into one OpenAPI document. The document
//! is served at `/api/openapi.json` and browsable through Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        city::{self, CITY_TAG},
        clothing::{self, CLOTHING_TAG},
        location::{self, LOCATION_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wearcast API",
        description = "Weather-based clothing recommendation backend"
    ),
    tags(
        (name = AUTH_TAG, description = "Login and registration"),
        (name = CITY_TAG, description = "Per-user city lists"),
        (name = CLOTHING_TAG, description = "Clothing catalog, choice history and suggestions"),
        (name = LOCATION_TAG, description = "Location logging")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::register))
        .routes(routes!(city::get_user_cities, city::add_user_city))
        .routes(routes!(city::delete_user_city_by_name))
        .routes(routes!(clothing::get_clothing_items))
        .routes(routes!(
            clothing::get_user_clothing_choices,
            clothing::add_user_clothing_choices
        ))
        .routes(routes!(clothing::suggest_clothing))
        .routes(routes!(location::post_user_location))
        .routes(routes!(location::get_latest_user_location))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}
