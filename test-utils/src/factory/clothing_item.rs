//! Clothing item factory for creating catalog entries.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a catalog clothing item.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Item name
/// - `category` - Item category (e.g. `tops`, `bottoms`)
///
/// # Returns
/// - `Ok(entity::clothing_item::Model)` - Created item entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_clothing_item(
    db: &DatabaseConnection,
    name: &str,
    category: &str,
) -> Result<entity::clothing_item::Model, DbErr> {
    entity::clothing_item::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        category: ActiveValue::Set(category.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
