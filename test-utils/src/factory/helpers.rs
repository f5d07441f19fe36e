//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user with a linked city.
///
/// The city is created with the given name and linked with display order 0 and no
/// favorite flag.
///
/// # Arguments
/// - `db` - Database connection
/// - `city_name` - Name of the catalog city to create
///
/// # Returns
/// - `Ok((user, city, link))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_city(
    db: &DatabaseConnection,
    city_name: &str,
) -> Result<
    (
        entity::user::Model,
        entity::city::Model,
        entity::user_city::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let city = crate::factory::city::create_city(db, city_name).await?;
    let link = crate::factory::user_city::create_user_city(db, user.user_id, city.city_id).await?;

    Ok((user, city, link))
}
