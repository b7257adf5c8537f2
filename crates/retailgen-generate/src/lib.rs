//! Seeded generator for the retail dataset.
//!
//! Builds customers, products and stores independently, then orders, then
//! order lines (which back-fill each order's total), and persists the five
//! tables as CSV only once all of them exist in memory.

pub mod engine;
pub mod errors;
pub mod foreign;
pub mod generators;
pub mod model;
pub mod output;
pub mod rng;

pub use engine::{GenerationEngine, GenerationResult, generate_dataset};
pub use errors::{GenerationError, Stage};
pub use foreign::{Keyed, RowIndex};
pub use model::{GenerateOptions, GenerationReport, TableReport};
