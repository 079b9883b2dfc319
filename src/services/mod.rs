// Business services behind the HTTP handlers and the CLI
pub mod inventory;
pub mod low_stock;
pub mod products;
