//! Per-user city lists.

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::server::{
    data::{city::CityRepository, user_city::UserCityRepository},
    error::AppError,
    model::city::{AddUserCityParam, CreateUserCityParam, UserCity},
};

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every city on a user's list.
    pub async fn get_user_cities(&self, user_id: i32) -> Result<Vec<UserCity>, AppError> {
        let cities = UserCityRepository::new(self.db).get_by_user(user_id).await?;

        Ok(cities)
    }

    /// Adds a city to a user's list by name.
    ///
    /// Resolves the name against the catalog and inserts a new catalog city when the name
    /// is unknown, then links it to the user. A duplicate link or an unknown user fails with
    /// a database error.
    pub async fn add_user_city(&self, param: AddUserCityParam) -> Result<(), AppError> {
        let cities = CityRepository::new(self.db);

        let city = match cities.find_by_name(&param.city_name).await? {
            Some(city) => city,
            None => cities.create(param.city_name).await?,
        };

        UserCityRepository::new(self.db)
            .create(CreateUserCityParam {
                user_id: param.user_id,
                city_id: city.city_id,
                display_order: param.display_order,
                is_favorite: param.is_favorite,
            })
            .await?;

        Ok(())
    }

    /// Removes a city from a user's list by name.
    ///
    /// Deletes the user's link and then the catalog city itself if no other user still
    /// lists it. Both deletes run in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Link removed (or was already absent)
    /// - `Err(AppError::NotFound)` - No catalog city has that name
    /// - `Err(AppError::DbErr)` - Database error; the transaction was rolled back
    pub async fn delete_user_city_by_name(
        &self,
        user_id: i32,
        city_name: &str,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        match Self::delete_in(&txn, user_id, city_name).await {
            Ok(()) => {
                txn.commit().await?;
                Ok(())
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back city deletion: {}", rollback_err);
                }
                Err(err)
            }
        }
    }

    async fn delete_in(
        txn: &DatabaseTransaction,
        user_id: i32,
        city_name: &str,
    ) -> Result<(), AppError> {
        let cities = CityRepository::new(txn);

        let city = cities
            .find_by_name(city_name)
            .await?
            .ok_or_else(|| AppError::NotFound("City not found".to_string()))?;

        UserCityRepository::new(txn)
            .delete(user_id, city.city_id)
            .await?;

        if cities.delete_if_unreferenced(city.city_id).await? {
            tracing::debug!("Removed unreferenced city {} from catalog", city.city_id);
        }

        Ok(())
    }
}
