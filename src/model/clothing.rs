use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ClothingItemDto {
    pub clothing_id: i32,
    pub name: String,
    pub category: String,
}

/// One chosen item inside a batch.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ClothingChoiceEntryDto {
    pub clothing_id: i32,
    /// Accepted for compatibility; the batch-level flag is what gets stored.
    #[serde(default)]
    pub is_recommended: bool,
}

/// A batch of chosen items sharing one date, weather and temperature.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct AddClothingChoicesDto {
    pub user_id: i32,
    /// Format: "YYYY-MM-DD"
    pub choice_date: NaiveDate,
    pub weather: String,
    pub temperature: f64,
    #[serde(default)]
    pub is_recommended: bool,
    #[serde(default)]
    pub choices: Vec<ClothingChoiceEntryDto>,
}

/// A stored clothing choice from the user's history.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ClothingChoiceDto {
    pub choice_id: i32,
    pub clothing_id: i32,
    pub choice_date: NaiveDate,
    pub weather: String,
    pub temperature: f64,
    pub is_recommended: bool,
}

/// Current conditions to base an outfit suggestion on.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SuggestionRequestDto {
    /// Temperature in degrees Celsius
    pub temp: f64,
    pub weather: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SuggestionDto {
    pub items: Vec<String>,
}
