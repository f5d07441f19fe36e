use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::server::{
    config::Config,
    connection::{ConnectionManager, STARTUP_RETRY},
    error::{config::ConfigError, AppError},
};

/// Connects to the MySQL database and runs pending migrations.
///
/// Retries the initial connection with the startup policy (10 attempts, 3 seconds apart)
/// so the backend can start alongside a database container that is still booting. Then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request is
/// served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(ConnectionManager)` - Connected manager with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<ConnectionManager, AppError> {
    use migration::{Migrator, MigratorTrait};

    let connections = ConnectionManager::new(&config.database_url);
    let db = connections.connect_with_retry(&STARTUP_RETRY).await?;

    Migrator::up(&db, None).await?;

    Ok(connections)
}

/// Builds the CORS policy for the configured origins.
///
/// Allows GET, POST, PUT, DELETE and OPTIONS with the Content-Type and Authorization
/// headers.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer ready to wrap the router
/// - `Err(ConfigError::InvalidValue)` - An origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("'{}': {}", origin, e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}
