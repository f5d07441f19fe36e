use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2id PHC string.
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_city::Entity")]
    UserCity,
    #[sea_orm(has_many = "super::user_clothing_choice::Entity")]
    UserClothingChoice,
    #[sea_orm(has_many = "super::user_location::Entity")]
    UserLocation,
}

impl Related<super::user_city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserCity.def()
    }
}

impl Related<super::user_clothing_choice::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserClothingChoice.def()
    }
}

impl Related<super::user_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserLocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
