use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_users_table::Users;
use super::m20250601_000004_create_clothing_items_table::ClothingItems;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserClothingChoices::Table)
                    .if_not_exists()
                    .col(pk_auto(UserClothingChoices::ChoiceId))
                    .col(integer(UserClothingChoices::UserId))
                    .col(integer(UserClothingChoices::ClothingId))
                    .col(date(UserClothingChoices::ChoiceDate))
                    .col(string(UserClothingChoices::Weather))
                    .col(double(UserClothingChoices::Temperature))
                    .col(boolean(UserClothingChoices::IsRecommended).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_clothing_choices_user_id")
                            .from(UserClothingChoices::Table, UserClothingChoices::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_clothing_choices_clothing_id")
                            .from(UserClothingChoices::Table, UserClothingChoices::ClothingId)
                            .to(ClothingItems::Table, ClothingItems::ClothingId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_user_clothing_choices_user_date")
                            .col(UserClothingChoices::UserId)
                            .col(UserClothingChoices::ChoiceDate),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserClothingChoices::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserClothingChoices {
    Table,
    ChoiceId,
    UserId,
    ClothingId,
    ChoiceDate,
    Weather,
    Temperature,
    IsRecommended,
}
