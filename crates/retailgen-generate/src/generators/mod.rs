//! Table generators, in dependency order.

pub mod entities;
pub mod order_items;
pub mod orders;

pub use entities::{generate_customers, generate_products, generate_stores};
pub use order_items::{LineItemSettings, generate_order_items};
pub use orders::generate_orders;

use crate::errors::GenerationError;

fn ensure_positive(name: &str, count: u32) -> Result<(), GenerationError> {
    if count == 0 {
        return Err(GenerationError::invalid(format!("{name} must be positive")));
    }
    Ok(())
}
