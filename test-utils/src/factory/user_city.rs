//! User-city link factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating user-city links with customizable per-user attributes.
pub struct UserCityFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    city_id: i32,
    display_order: i32,
    is_favorite: i32,
}

impl<'a> UserCityFactory<'a> {
    /// Creates a new UserCityFactory linking the given user and city.
    ///
    /// Defaults:
    /// - display_order: `0`
    /// - is_favorite: `0`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, city_id: i32) -> Self {
        Self {
            db,
            user_id,
            city_id,
            display_order: 0,
            is_favorite: 0,
        }
    }

    /// Sets the display order of the link.
    pub fn display_order(mut self, display_order: i32) -> Self {
        self.display_order = display_order;
        self
    }

    /// Sets the favorite flag (0 or 1).
    pub fn is_favorite(mut self, is_favorite: i32) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Builds and inserts the link into the database.
    pub async fn build(self) -> Result<entity::user_city::Model, DbErr> {
        entity::user_city::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            city_id: ActiveValue::Set(self.city_id),
            display_order: ActiveValue::Set(self.display_order),
            is_favorite: ActiveValue::Set(self.is_favorite),
        }
        .insert(self.db)
        .await
    }
}

/// Links a user to a city with default attributes.
pub async fn create_user_city(
    db: &DatabaseConnection,
    user_id: i32,
    city_id: i32,
) -> Result<entity::user_city::Model, DbErr> {
    UserCityFactory::new(db, user_id, city_id).build().await
}
