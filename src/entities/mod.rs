// Catalog entities read by the alert engine and written by the product/inventory services
pub mod company;
pub mod inventory;
pub mod product;
pub mod product_category;
pub mod product_supplier;
pub mod sale;
pub mod supplier;
pub mod warehouse;
