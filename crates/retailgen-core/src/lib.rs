//! Core contracts for retailgen.
//!
//! This crate defines the row types of the five generated tables, the money
//! type, the fixed catalog pools, and the generation configuration shared by
//! the generator, the reporting layer and the CLI.

pub mod catalog;
pub mod config;
pub mod error;
pub mod money;
pub mod schema;

pub use catalog::{Category, PaymentMethod, Region, STORE_TYPES};
pub use config::GenerationConfig;
pub use error::ConfigError;
pub use money::{Money, ParseMoneyError};
pub use schema::{
    Customer, CustomerId, Dataset, Order, OrderId, OrderItem, Product, ProductId, Store, StoreId,
    TableName,
};
