use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// E-mail and password pair sent to login and registration.
#[derive(Serialize, Deserialize, ToSchema, Clone)]
pub struct CredentialsDto {
    pub email: String,
    pub password: String,
}

/// Successful login or registration.
///
/// `user_id` is sent as a string; the client stores it verbatim.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct AuthResponseDto {
    #[serde(
        serialize_with = "serialize_i32_as_string",
        deserialize_with = "deserialize_i32_from_string"
    )]
    #[schema(value_type = String)]
    pub user_id: i32,
    pub message: String,
}

fn serialize_i32_as_string<S>(value: &i32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_string())
}

fn deserialize_i32_from_string<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;
    String::deserialize(deserializer)?
        .parse::<i32>()
        .map_err(D::Error::custom)
}
