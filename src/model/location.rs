use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Coordinates reported by the client. Any timestamp sent alongside is ignored.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PostLocationDto {
    pub latitude: f64,
    pub longitude: f64,
}

/// A stored location with its server-assigned timestamp.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct LocationDto {
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
}
