use crate::server::{data::user_city::UserCityRepository, model::city::CreateUserCityParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_user;
