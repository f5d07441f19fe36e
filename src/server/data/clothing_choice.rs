//! Clothing choice history repository.
//!
//! Batches are written row by row. Callers that need all-or-nothing semantics pass an open
//! transaction as the connection.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::clothing::{ClothingChoice, CreateClothingChoicesParam};

pub struct ClothingChoiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClothingChoiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one row per clothing ID of the batch.
    ///
    /// Every row carries the batch's user, date, weather, temperature and recommendation
    /// flag. Stops at the first failing insert; rows inserted before it are only undone if
    /// `db` is a transaction that the caller rolls back.
    ///
    /// # Arguments
    /// - `param` - Shared batch values and the chosen clothing IDs
    ///
    /// # Returns
    /// - `Ok(Vec<ClothingChoice>)` - Inserted rows in batch order
    /// - `Err(DbErr)` - Database error, including an unknown clothing ID
    pub async fn create_many(
        &self,
        param: &CreateClothingChoicesParam,
    ) -> Result<Vec<ClothingChoice>, DbErr> {
        let mut created = Vec::with_capacity(param.clothing_ids.len());

        for &clothing_id in &param.clothing_ids {
            let entity = entity::user_clothing_choice::ActiveModel {
                user_id: ActiveValue::Set(param.user_id),
                clothing_id: ActiveValue::Set(clothing_id),
                choice_date: ActiveValue::Set(param.choice_date),
                weather: ActiveValue::Set(param.weather.clone()),
                temperature: ActiveValue::Set(param.temperature),
                is_recommended: ActiveValue::Set(param.is_recommended),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            created.push(ClothingChoice::from_entity(entity));
        }

        Ok(created)
    }

    /// Gets a user's choice history, newest date first, then in insertion order.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<ClothingChoice>, DbErr> {
        let choices = entity::prelude::UserClothingChoice::find()
            .filter(entity::user_clothing_choice::Column::UserId.eq(user_id))
            .order_by_desc(entity::user_clothing_choice::Column::ChoiceDate)
            .order_by_asc(entity::user_clothing_choice::Column::ChoiceId)
            .all(self.db)
            .await?;

        Ok(choices.into_iter().map(ClothingChoice::from_entity).collect())
    }
}
