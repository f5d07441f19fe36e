//! City domain models and parameters.
//!
//! Cities form a catalog shared by all users. A user's list is a set of links into that
//! catalog carrying per-user display order and favorite flag.

use crate::model::city::{AddUserCityDto, UserCityDto};

/// Catalog city.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub city_id: i32,
    pub city_name: String,
}

impl City {
    pub fn from_entity(entity: entity::city::Model) -> Self {
        Self {
            city_id: entity.city_id,
            city_name: entity.city_name,
        }
    }
}

/// City as it appears on one user's list.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCity {
    pub city_id: i32,
    pub city_name: String,
    pub display_order: i32,
    /// 0 or 1
    pub is_favorite: i32,
}

impl UserCity {
    /// Joins a link row with its catalog city.
    pub fn from_entity(link: entity::user_city::Model, city: entity::city::Model) -> Self {
        Self {
            city_id: link.city_id,
            city_name: city.city_name,
            display_order: link.display_order,
            is_favorite: link.is_favorite,
        }
    }

    pub fn into_dto(self) -> UserCityDto {
        UserCityDto {
            city_id: self.city_id,
            city_name: self.city_name,
            display_order: self.display_order,
            is_favorite: self.is_favorite,
        }
    }
}

/// Parameters for adding a city to a user's list by name.
#[derive(Debug, Clone)]
pub struct AddUserCityParam {
    pub user_id: i32,
    pub city_name: String,
    pub display_order: i32,
    pub is_favorite: i32,
}

impl AddUserCityParam {
    pub fn from_dto(user_id: i32, dto: AddUserCityDto) -> Self {
        Self {
            user_id,
            city_name: dto.city_name,
            display_order: dto.display_order,
            is_favorite: dto.is_favorite,
        }
    }
}

/// Parameters for inserting a link row once the city ID is known.
#[derive(Debug, Clone)]
pub struct CreateUserCityParam {
    pub user_id: i32,
    pub city_id: i32,
    pub display_order: i32,
    pub is_favorite: i32,
}
