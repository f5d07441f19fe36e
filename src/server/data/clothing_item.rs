//! Read-only access to the clothing catalog.

use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::clothing::ClothingItem;

pub struct ClothingItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClothingItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the full catalog ordered by category, then name.
    pub async fn get_all(&self) -> Result<Vec<ClothingItem>, DbErr> {
        let items = entity::prelude::ClothingItem::find()
            .order_by_asc(entity::clothing_item::Column::Category)
            .order_by_asc(entity::clothing_item::Column::Name)
            .all(self.db)
            .await?;

        Ok(items.into_iter().map(ClothingItem::from_entity).collect())
    }
}
