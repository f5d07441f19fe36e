//! User domain models and parameters.

use crate::model::auth::CredentialsDto;

/// Registered user with the stored password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: i32,
    pub email: String,
    /// Argon2id PHC string.
    pub password_hash: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            email: entity.email,
            password_hash: entity.password,
        }
    }
}

/// Parameters for verifying a login attempt.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    /// Plaintext password as sent by the client.
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: CredentialsDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for registering a new user.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub email: String,
    /// Plaintext password as sent by the client; hashed before it reaches the repository.
    pub password: String,
}

impl RegisterParam {
    pub fn from_dto(dto: CredentialsDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
        }
    }
}

/// Parameters for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub password_hash: String,
}
