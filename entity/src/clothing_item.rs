use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clothing_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub clothing_id: i32,
    pub name: String,
    pub category: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_clothing_choice::Entity")]
    UserClothingChoice,
}

impl Related<super::user_clothing_choice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserClothingChoice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
