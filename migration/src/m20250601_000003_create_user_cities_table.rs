use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_users_table::Users;
use super::m20250601_000002_create_cities_table::Cities;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCities::Table)
                    .if_not_exists()
                    .col(integer(UserCities::UserId))
                    .col(integer(UserCities::CityId))
                    .col(integer(UserCities::DisplayOrder).default(0))
                    .col(integer(UserCities::IsFavorite).default(0))
                    .primary_key(
                        Index::create()
                            .name("pk_user_cities")
                            .col(UserCities::UserId)
                            .col(UserCities::CityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_cities_user_id")
                            .from(UserCities::Table, UserCities::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_cities_city_id")
                            .from(UserCities::Table, UserCities::CityId)
                            .to(Cities::Table, Cities::CityId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserCities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserCities {
    Table,
    UserId,
    CityId,
    DisplayOrder,
    IsFavorite,
}
