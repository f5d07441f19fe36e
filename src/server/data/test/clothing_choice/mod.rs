use crate::server::{
    data::clothing_choice::ClothingChoiceRepository, model::clothing::CreateClothingChoicesParam,
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod get_by_user;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
