//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the foreign keys they need as arguments so
//! tests stay explicit about which rows they depend on.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::create_user(&db).await?;
//!     let city = factory::create_city(&db, "Tokyo").await?;
//!     factory::create_user_city(&db, user.user_id, city.city_id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .user_id(7)
//!     .email("seven@example.com")
//!     .password_hash(hash)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `city` - Create catalog city entities
//! - `user_city` - Create user-city link entities
//! - `clothing_item` - Create catalog clothing item entities
//! - `user_clothing_choice` - Create clothing choice history entities
//! - `user_location` - Create location log entities
//! - `helpers` - Unique id generation and multi-entity helpers

pub mod city;
pub mod clothing_item;
pub mod helpers;
pub mod user;
pub mod user_city;
pub mod user_clothing_choice;
pub mod user_location;

// Re-export commonly used factory functions for concise usage
pub use city::create_city;
pub use clothing_item::create_clothing_item;
pub use user::create_user;
pub use user_city::create_user_city;
pub use user_clothing_choice::create_clothing_choice;
pub use user_location::create_location;
