use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_clothing_choices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub choice_id: i32,
    pub user_id: i32,
    pub clothing_id: i32,
    pub choice_date: Date,
    pub weather: String,
    #[sea_orm(column_type = "Double")]
    pub temperature: f64,
    pub is_recommended: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::UserId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::clothing_item::Entity",
        from = "Column::ClothingId",
        to = "super::clothing_item::Column::ClothingId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ClothingItem,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::clothing_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClothingItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
