//! City catalog repository.
//!
//! Cities are shared by every user's list. Rows are created on demand when a user adds a
//! city by name and removed once the last link to them is gone.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::city::City;

pub struct CityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a catalog city by its exact name.
    pub async fn find_by_name(&self, city_name: &str) -> Result<Option<City>, DbErr> {
        let entity = entity::prelude::City::find()
            .filter(entity::city::Column::CityName.eq(city_name))
            .one(self.db)
            .await?;

        Ok(entity.map(City::from_entity))
    }

    /// Inserts a new catalog city.
    ///
    /// Fails with a unique violation if another request created the same name first.
    pub async fn create(&self, city_name: String) -> Result<City, DbErr> {
        let entity = entity::city::ActiveModel {
            city_name: ActiveValue::Set(city_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(City::from_entity(entity))
    }

    /// Deletes a catalog city if no user's list references it anymore.
    ///
    /// # Returns
    /// - `Ok(true)` - City row deleted
    /// - `Ok(false)` - City is still linked by at least one user, or does not exist
    /// - `Err(DbErr)` - Database error during count or delete
    pub async fn delete_if_unreferenced(&self, city_id: i32) -> Result<bool, DbErr> {
        let links = entity::prelude::UserCity::find()
            .filter(entity::user_city::Column::CityId.eq(city_id))
            .count(self.db)
            .await?;

        if links > 0 {
            return Ok(false);
        }

        let result = entity::prelude::City::delete_by_id(city_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
