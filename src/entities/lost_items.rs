use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "lost_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub owner_name: Option<String>,
    pub item_desc: Option<String>,
    pub last_seen_location: Option<String>,
    pub status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
