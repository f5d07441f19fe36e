//! Clothing catalog and clothing choice history.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{clothing_choice::ClothingChoiceRepository, clothing_item::ClothingItemRepository},
    error::AppError,
    model::clothing::{ClothingChoice, ClothingItem, CreateClothingChoicesParam},
};

pub struct ClothingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClothingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the full clothing catalog.
    pub async fn get_items(&self) -> Result<Vec<ClothingItem>, AppError> {
        let items = ClothingItemRepository::new(self.db).get_all().await?;

        Ok(items)
    }

    /// Gets a user's clothing choice history.
    pub async fn get_choices(&self, user_id: i32) -> Result<Vec<ClothingChoice>, AppError> {
        let choices = ClothingChoiceRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok(choices)
    }

    /// Stores a batch of clothing choices all-or-nothing.
    ///
    /// Every row is inserted inside one transaction. The transaction commits only if all
    /// inserts succeed; otherwise it is rolled back and no row of the batch persists. An
    /// empty batch commits without writing anything.
    ///
    /// # Arguments
    /// - `param` - Shared batch values and chosen clothing IDs
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of rows written
    /// - `Err(AppError::DbErr)` - An insert or the commit failed
    pub async fn add_choices(&self, param: CreateClothingChoicesParam) -> Result<usize, AppError> {
        let txn = self.db.begin().await?;

        let result = ClothingChoiceRepository::new(&txn)
            .create_many(&param)
            .await;

        match result {
            Ok(created) => {
                txn.commit().await?;
                Ok(created.len())
            }
            Err(err) => {
                tracing::error!(
                    "Clothing choice batch for user {} failed, rolling back: {}",
                    param.user_id,
                    err
                );
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back clothing choice batch: {}", rollback_err);
                }
                Err(err.into())
            }
        }
    }
}
