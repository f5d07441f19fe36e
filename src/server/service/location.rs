//! Location logging.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::location::LocationRepository,
    error::AppError,
    model::location::{CreateLocationParam, Location},
};

pub struct LocationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LocationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Logs a location with the server's current time.
    pub async fn create(&self, param: CreateLocationParam) -> Result<Location, AppError> {
        let location = LocationRepository::new(self.db).create(param).await?;

        Ok(location)
    }

    /// Gets the most recently logged location of a user, if any.
    pub async fn get_latest(&self, user_id: i32) -> Result<Option<Location>, AppError> {
        let location = LocationRepository::new(self.db)
            .latest_by_user(user_id)
            .await?;

        Ok(location)
    }
}
