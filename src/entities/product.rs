use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, ActiveValue::Set, ConnectionTrait};
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Primary key
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owning company
    pub company_id: Uuid,

    /// Product name
    pub name: String,

    /// SKU (Stock Keeping Unit), unique and stored upper-cased
    #[sea_orm(unique)]
    pub sku: String,

    /// Product base price
    pub price: Decimal,

    /// Product category ID
    pub category_id: Option<Uuid>,

    /// Is the product active
    pub is_active: bool,

    /// Bundles derive their stock from components and are never alerted on
    pub is_bundle: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
}

/// Product entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id"
    )]
    Company,
    #[sea_orm(
        belongs_to = "super::product_category::Entity",
        from = "Column::CategoryId",
        to = "super::product_category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::inventory::Entity")]
    Inventory,
    #[sea_orm(has_many = "super::product_supplier::Entity")]
    SupplierLinks,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::product_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Inventory.def()
    }
}

impl Related<super::product_supplier::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierLinks.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;

        if insert {
            if let ActiveValue::NotSet = active_model.is_active {
                active_model.is_active = Set(true);
            }

            if let ActiveValue::NotSet = active_model.is_bundle {
                active_model.is_bundle = Set(false);
            }

            if let ActiveValue::NotSet = active_model.created_at {
                active_model.created_at = Set(Utc::now());
            }
        }

        active_model.updated_at = Set(Some(Utc::now()));

        Ok(active_model)
    }
}
