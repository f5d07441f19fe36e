use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClothingItems::Table)
                    .if_not_exists()
                    .col(pk_auto(ClothingItems::ClothingId))
                    .col(string(ClothingItems::Name))
                    .col(string(ClothingItems::Category))
                    .index(
                        Index::create()
                            .name("idx_clothing_items_category_name")
                            .col(ClothingItems::Category)
                            .col(ClothingItems::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClothingItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClothingItems {
    Table,
    ClothingId,
    Name,
    Category,
}
