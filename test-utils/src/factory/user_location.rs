//! Location factory for seeding the location log.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating location rows with a controllable timestamp.
pub struct LocationFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    latitude: f64,
    longitude: f64,
    created_at: DateTime<Utc>,
}

impl<'a> LocationFactory<'a> {
    /// Creates a new LocationFactory for the given user.
    ///
    /// Defaults:
    /// - latitude/longitude: Tokyo Station
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            latitude: 35.6812,
            longitude: 139.7671,
            created_at: Utc::now(),
        }
    }

    /// Sets the coordinates.
    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Sets the stored timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the location into the database.
    pub async fn build(self) -> Result<entity::user_location::Model, DbErr> {
        entity::user_location::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a location for the user with default values.
pub async fn create_location(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::user_location::Model, DbErr> {
    LocationFactory::new(db, user_id).build().await
}
