pub mod alerts;
pub mod common;
pub mod health;
pub mod inventory;
pub mod products;
