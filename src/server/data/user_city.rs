//! Repository for the links between users and catalog cities.

use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::model::city::{CreateUserCityParam, UserCity};

pub struct UserCityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserCityRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every city on a user's list joined with its catalog name.
    ///
    /// Rows come back in the store's natural order.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the list
    ///
    /// # Returns
    /// - `Ok(Vec<UserCity>)` - The user's cities, empty if none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<UserCity>, DbErr> {
        let rows = entity::prelude::UserCity::find()
            .filter(entity::user_city::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::City)
            .all(self.db)
            .await?;

        // The foreign key guarantees a city for every link
        Ok(rows
            .into_iter()
            .filter_map(|(link, city)| city.map(|city| UserCity::from_entity(link, city)))
            .collect())
    }

    /// Inserts a link between a user and a catalog city.
    ///
    /// # Returns
    /// - `Ok(())` - Link created
    /// - `Err(DbErr)` - Database error, including a duplicate link or an unknown user
    pub async fn create(&self, param: CreateUserCityParam) -> Result<(), DbErr> {
        entity::prelude::UserCity::insert(entity::user_city::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            city_id: ActiveValue::Set(param.city_id),
            display_order: ActiveValue::Set(param.display_order),
            is_favorite: ActiveValue::Set(param.is_favorite),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Removes a city from a user's list.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of links deleted (0 or 1)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, user_id: i32, city_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::UserCity::delete_many()
            .filter(entity::user_city::Column::UserId.eq(user_id))
            .filter(entity::user_city::Column::CityId.eq(city_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
