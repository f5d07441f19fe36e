use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A city on a user's list.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct UserCityDto {
    pub city_id: i32,
    pub city_name: String,
    pub display_order: i32,
    /// 0 or 1
    pub is_favorite: i32,
}

/// Adds a city to a user's list, creating the catalog entry when needed.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct AddUserCityDto {
    pub city_name: String,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub is_favorite: i32,
}
