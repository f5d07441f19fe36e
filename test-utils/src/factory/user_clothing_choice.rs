//! Clothing choice factory for seeding choice history.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating clothing choice rows.
pub struct ClothingChoiceFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    clothing_id: i32,
    choice_date: NaiveDate,
    weather: String,
    temperature: f64,
    is_recommended: bool,
}

impl<'a> ClothingChoiceFactory<'a> {
    /// Creates a new ClothingChoiceFactory for the given user and item.
    ///
    /// Defaults:
    /// - choice_date: `2025-05-27`
    /// - weather: `"sunny"`
    /// - temperature: `20.0`
    /// - is_recommended: `false`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, clothing_id: i32) -> Self {
        Self {
            db,
            user_id,
            clothing_id,
            choice_date: NaiveDate::from_ymd_opt(2025, 5, 27).unwrap_or_default(),
            weather: "sunny".to_string(),
            temperature: 20.0,
            is_recommended: false,
        }
    }

    /// Sets the date of the choice.
    pub fn choice_date(mut self, choice_date: NaiveDate) -> Self {
        self.choice_date = choice_date;
        self
    }

    /// Sets the weather description.
    pub fn weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = weather.into();
        self
    }

    /// Sets the temperature.
    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets whether the outfit was recommended.
    pub fn is_recommended(mut self, is_recommended: bool) -> Self {
        self.is_recommended = is_recommended;
        self
    }

    /// Builds and inserts the choice into the database.
    pub async fn build(self) -> Result<entity::user_clothing_choice::Model, DbErr> {
        entity::user_clothing_choice::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            clothing_id: ActiveValue::Set(self.clothing_id),
            choice_date: ActiveValue::Set(self.choice_date),
            weather: ActiveValue::Set(self.weather),
            temperature: ActiveValue::Set(self.temperature),
            is_recommended: ActiveValue::Set(self.is_recommended),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a clothing choice with default values.
pub async fn create_clothing_choice(
    db: &DatabaseConnection,
    user_id: i32,
    clothing_id: i32,
) -> Result<entity::user_clothing_choice::Model, DbErr> {
    ClothingChoiceFactory::new(db, user_id, clothing_id)
        .build()
        .await
}
