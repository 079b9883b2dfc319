use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_catalog_tables::Migration),
            Box::new(m20240301_000002_create_stock_tables::Migration),
        ]
    }
}

mod m20240301_000001_create_catalog_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000001_create_catalog_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Companies::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Companies::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Companies::Name).string().not_null())
                        .col(
                            ColumnDef::new(Companies::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ProductCategories::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProductCategories::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ProductCategories::Name).string().not_null())
                        .col(
                            ColumnDef::new(ProductCategories::LowStockThreshold)
                                .integer()
                                .null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Warehouses::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Warehouses::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Warehouses::CompanyId).uuid().not_null())
                        .col(ColumnDef::new(Warehouses::Name).string().not_null())
                        .col(ColumnDef::new(Warehouses::Location).string().null())
                        .col(
                            ColumnDef::new(Warehouses::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Warehouses::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_warehouses_company_id")
                                .from(Warehouses::Table, Warehouses::CompanyId)
                                .to(Companies::Table, Companies::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Products::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Products::CompanyId).uuid().not_null())
                        .col(ColumnDef::new(Products::Name).string().not_null())
                        .col(ColumnDef::new(Products::Sku).string().not_null().unique_key())
                        .col(ColumnDef::new(Products::Price).decimal().not_null())
                        .col(ColumnDef::new(Products::CategoryId).uuid().null())
                        .col(
                            ColumnDef::new(Products::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Products::IsBundle)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(
                            ColumnDef::new(Products::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Products::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_products_company_id")
                                .from(Products::Table, Products::CompanyId)
                                .to(Companies::Table, Companies::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_products_category_id")
                                .from(Products::Table, Products::CategoryId)
                                .to(ProductCategories::Table, ProductCategories::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_company_id")
                        .table(Products::Table)
                        .col(Products::CompanyId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Suppliers::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Suppliers::Name).string().not_null())
                        .col(ColumnDef::new(Suppliers::ContactEmail).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ProductSuppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ProductSuppliers::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(ProductSuppliers::ProductId).uuid().not_null())
                        .col(ColumnDef::new(ProductSuppliers::SupplierId).uuid().not_null())
                        .col(
                            ColumnDef::new(ProductSuppliers::IsPrimary)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_product_suppliers_product_id")
                                .from(ProductSuppliers::Table, ProductSuppliers::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_product_suppliers_supplier_id")
                                .from(ProductSuppliers::Table, ProductSuppliers::SupplierId)
                                .to(Suppliers::Table, Suppliers::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_product_suppliers_product_primary")
                        .table(ProductSuppliers::Table)
                        .col(ProductSuppliers::ProductId)
                        .col(ProductSuppliers::IsPrimary)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ProductSuppliers::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Warehouses::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(ProductCategories::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Companies::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Companies {
        Table,
        Id,
        Name,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    enum ProductCategories {
        Table,
        Id,
        Name,
        LowStockThreshold,
    }

    #[derive(DeriveIden)]
    pub(super) enum Warehouses {
        Table,
        Id,
        CompanyId,
        Name,
        Location,
        IsActive,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum Products {
        Table,
        Id,
        CompanyId,
        Name,
        Sku,
        Price,
        CategoryId,
        IsActive,
        IsBundle,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Suppliers {
        Table,
        Id,
        Name,
        ContactEmail,
    }

    #[derive(DeriveIden)]
    enum ProductSuppliers {
        Table,
        Id,
        ProductId,
        SupplierId,
        IsPrimary,
    }
}

mod m20240301_000002_create_stock_tables {
    use super::m20240301_000001_create_catalog_tables::{Products, Warehouses};
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000002_create_stock_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Inventory::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Inventory::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Inventory::ProductId).uuid().not_null())
                        .col(ColumnDef::new(Inventory::WarehouseId).uuid().not_null())
                        .col(
                            ColumnDef::new(Inventory::Quantity)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Inventory::LowStockThreshold).integer().null())
                        .col(
                            ColumnDef::new(Inventory::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_inventory_product_id")
                                .from(Inventory::Table, Inventory::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_inventory_warehouse_id")
                                .from(Inventory::Table, Inventory::WarehouseId)
                                .to(Warehouses::Table, Warehouses::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // One row per (product, warehouse)
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_inventory_product_warehouse")
                        .table(Inventory::Table)
                        .col(Inventory::ProductId)
                        .col(Inventory::WarehouseId)
                        .unique()
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Sales::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Sales::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Sales::ProductId).uuid().not_null())
                        .col(ColumnDef::new(Sales::WarehouseId).uuid().not_null())
                        .col(ColumnDef::new(Sales::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(Sales::SaleDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_sales_product_id")
                                .from(Sales::Table, Sales::ProductId)
                                .to(Products::Table, Products::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_sales_warehouse_id")
                                .from(Sales::Table, Sales::WarehouseId)
                                .to(Warehouses::Table, Warehouses::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_sales_product_warehouse_date")
                        .table(Sales::Table)
                        .col(Sales::ProductId)
                        .col(Sales::WarehouseId)
                        .col(Sales::SaleDate)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Sales::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Inventory::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Inventory {
        Table,
        Id,
        ProductId,
        WarehouseId,
        Quantity,
        LowStockThreshold,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum Sales {
        Table,
        Id,
        ProductId,
        WarehouseId,
        Quantity,
        SaleDate,
    }
}
