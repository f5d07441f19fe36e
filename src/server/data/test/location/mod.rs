use crate::server::{data::location::LocationRepository, model::location::CreateLocationParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod latest_by_user;
