use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "found_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub finder_name: Option<String>,
    pub item_desc: Option<String>,
    /// Free-text location or contact details left by the finder.
    pub found_location: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
