//! Location log domain models.

use chrono::{DateTime, Utc};

use crate::model::location::{LocationDto, PostLocationDto};

/// One logged location.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub location_id: i32,
    pub user_id: i32,
    pub latitude: f64,
    pub longitude: f64,
    /// Assigned by the server when the row is written.
    pub created_at: DateTime<Utc>,
}

impl Location {
    pub fn from_entity(entity: entity::user_location::Model) -> Self {
        Self {
            location_id: entity.location_id,
            user_id: entity.user_id,
            latitude: entity.latitude,
            longitude: entity.longitude,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            latitude: self.latitude,
            longitude: self.longitude,
            created_at: self.created_at,
        }
    }
}

/// Parameters for logging a location.
#[derive(Debug, Clone)]
pub struct CreateLocationParam {
    pub user_id: i32,
    pub latitude: f64,
    pub longitude: f64,
}

impl CreateLocationParam {
    pub fn from_dto(user_id: i32, dto: PostLocationDto) -> Self {
        Self {
            user_id,
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}
