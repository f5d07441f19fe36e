use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserLocations::Table)
                    .if_not_exists()
                    .col(pk_auto(UserLocations::LocationId))
                    .col(integer(UserLocations::UserId))
                    .col(double(UserLocations::Latitude))
                    .col(double(UserLocations::Longitude))
                    .col(
                        timestamp_with_time_zone(UserLocations::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_locations_user_id")
                            .from(UserLocations::Table, UserLocations::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_user_locations_user_created_at")
                            .col(UserLocations::UserId)
                            .col(UserLocations::CreatedAt),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserLocations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserLocations {
    Table,
    LocationId,
    UserId,
    Latitude,
    Longitude,
    CreatedAt,
}
