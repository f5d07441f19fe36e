//! City factory for creating catalog city entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a catalog city with the given name.
///
/// # Arguments
/// - `db` - Database connection
/// - `city_name` - Unique city name
///
/// # Returns
/// - `Ok(entity::city::Model)` - Created city entity
/// - `Err(DbErr)` - Database error during insert (including duplicate names)
pub async fn create_city(
    db: &DatabaseConnection,
    city_name: &str,
) -> Result<entity::city::Model, DbErr> {
    entity::city::ActiveModel {
        city_name: ActiveValue::Set(city_name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
