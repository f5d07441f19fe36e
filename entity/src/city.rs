use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub city_id: i32,
    #[sea_orm(unique)]
    pub city_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_city::Entity")]
    UserCity,
}

impl Related<super::user_city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserCity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
