//! SeaORM entities for every table the backend reads or writes.

pub mod prelude;

pub mod city;
pub mod clothing_item;
pub mod user;
pub mod user_city;
pub mod user_clothing_choice;
pub mod user_location;
