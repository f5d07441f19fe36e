use crate::server::data::city::CityRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_if_unreferenced;
mod find_by_name;
