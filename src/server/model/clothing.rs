//! Clothing catalog and clothing choice domain models.

use chrono::NaiveDate;

use crate::model::clothing::{AddClothingChoicesDto, ClothingChoiceDto, ClothingItemDto};

/// Catalog clothing item.
#[derive(Debug, Clone, PartialEq)]
pub struct ClothingItem {
    pub clothing_id: i32,
    pub name: String,
    pub category: String,
}

impl ClothingItem {
    pub fn from_entity(entity: entity::clothing_item::Model) -> Self {
        Self {
            clothing_id: entity.clothing_id,
            name: entity.name,
            category: entity.category,
        }
    }

    pub fn into_dto(self) -> ClothingItemDto {
        ClothingItemDto {
            clothing_id: self.clothing_id,
            name: self.name,
            category: self.category,
        }
    }
}

/// One stored clothing choice.
#[derive(Debug, Clone, PartialEq)]
pub struct ClothingChoice {
    pub choice_id: i32,
    pub user_id: i32,
    pub clothing_id: i32,
    pub choice_date: NaiveDate,
    pub weather: String,
    pub temperature: f64,
    pub is_recommended: bool,
}

impl ClothingChoice {
    pub fn from_entity(entity: entity::user_clothing_choice::Model) -> Self {
        Self {
            choice_id: entity.choice_id,
            user_id: entity.user_id,
            clothing_id: entity.clothing_id,
            choice_date: entity.choice_date,
            weather: entity.weather,
            temperature: entity.temperature,
            is_recommended: entity.is_recommended,
        }
    }

    pub fn into_dto(self) -> ClothingChoiceDto {
        ClothingChoiceDto {
            choice_id: self.choice_id,
            clothing_id: self.clothing_id,
            choice_date: self.choice_date,
            weather: self.weather,
            temperature: self.temperature,
            is_recommended: self.is_recommended,
        }
    }
}

/// A batch of chosen items written in one transaction.
///
/// Every row of the batch shares the user, date, weather, temperature and recommendation
/// flag given here.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateClothingChoicesParam {
    pub user_id: i32,
    pub choice_date: NaiveDate,
    pub weather: String,
    pub temperature: f64,
    pub is_recommended: bool,
    pub clothing_ids: Vec<i32>,
}

impl CreateClothingChoicesParam {
    /// Converts the request body into a batch.
    ///
    /// The per-entry `is_recommended` flags are dropped: the batch-level flag is the one
    /// stored on every row.
    pub fn from_dto(dto: AddClothingChoicesDto) -> Self {
        Self {
            user_id: dto.user_id,
            choice_date: dto.choice_date,
            weather: dto.weather,
            temperature: dto.temperature,
            is_recommended: dto.is_recommended,
            clothing_ids: dto.choices.into_iter().map(|c| c.clothing_id).collect(),
        }
    }
}
