//! Location log repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::location::{CreateLocationParam, Location};

pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a location to the user's log.
    ///
    /// `created_at` is always the server's current UTC time.
    ///
    /// # Arguments
    /// - `param` - User and coordinates
    ///
    /// # Returns
    /// - `Ok(Location)` - The stored location
    /// - `Err(DbErr)` - Database error, including an unknown user
    pub async fn create(&self, param: CreateLocationParam) -> Result<Location, DbErr> {
        let entity = entity::user_location::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            latitude: ActiveValue::Set(param.latitude),
            longitude: ActiveValue::Set(param.longitude),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Location::from_entity(entity))
    }

    /// Gets the most recently logged location of a user.
    ///
    /// Ties on `created_at` go to the later insert.
    pub async fn latest_by_user(&self, user_id: i32) -> Result<Option<Location>, DbErr> {
        let entity = entity::prelude::UserLocation::find()
            .filter(entity::user_location::Column::UserId.eq(user_id))
            .order_by_desc(entity::user_location::Column::CreatedAt)
            .order_by_desc(entity::user_location::Column::LocationId)
            .one(self.db)
            .await?;

        Ok(entity.map(Location::from_entity))
    }
}
