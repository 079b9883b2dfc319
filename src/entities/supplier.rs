use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub contact_email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_supplier::Entity")]
    ProductLinks,
}

impl Related<super::product_supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductLinks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
