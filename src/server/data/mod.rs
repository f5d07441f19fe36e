//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each table
//! of the schema. Repositories use SeaORM entity models internally and return domain models
//! to keep the data layer separate from business logic. Every repository is generic over
//! `ConnectionTrait`, so the same code runs against the pool or inside a transaction opened
//! by the service layer.

pub mod city;
pub mod clothing_choice;
pub mod clothing_item;
pub mod location;
pub mod user;
pub mod user_city;

#[cfg(test)]
mod test;
