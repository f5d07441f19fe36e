use crate::server::data::clothing_item::ClothingItemRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
