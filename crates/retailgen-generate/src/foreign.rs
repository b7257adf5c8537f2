use std::collections::HashMap;

use rand::Rng;

use retailgen_core::{Customer, Product, Store, TableName};

use crate::errors::{GenerationError, Stage};

/// Row with a single-column integer primary key.
pub trait Keyed {
    fn key(&self) -> u32;
}

impl Keyed for Customer {
    fn key(&self) -> u32 {
        self.customer_id
    }
}

impl Keyed for Product {
    fn key(&self) -> u32 {
        self.product_id
    }
}

impl Keyed for Store {
    fn key(&self) -> u32 {
        self.store_id
    }
}

/// Primary key index over a borrowed table.
///
/// Built once per table; lookups by key are O(1) and random picks are
/// uniform over rows.
#[derive(Debug)]
pub struct RowIndex<'a, T> {
    rows: &'a [T],
    positions: HashMap<u32, usize>,
}

impl<'a, T: Keyed> RowIndex<'a, T> {
    pub fn new(rows: &'a [T]) -> Self {
        let positions = rows
            .iter()
            .enumerate()
            .map(|(position, row)| (row.key(), position))
            .collect();
        Self { rows, positions }
    }

    /// Index a parent table that `stage` cannot run without.
    pub fn require(stage: Stage, table: TableName, rows: &'a [T]) -> Result<Self, GenerationError> {
        if rows.is_empty() {
            return Err(GenerationError::MissingInput { stage, table });
        }
        Ok(Self::new(rows))
    }

    pub fn get(&self, key: u32) -> Option<&'a T> {
        self.positions.get(&key).map(|position| &self.rows[*position])
    }

    /// Uniform pick with replacement.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a T> {
        if self.rows.is_empty() {
            return None;
        }
        Some(&self.rows[rng.random_range(0..self.rows.len())])
    }

    /// Uniform sample without replacement, capped at the table size.
    pub fn sample_distinct<R: Rng + ?Sized>(&self, rng: &mut R, amount: usize) -> Vec<&'a T> {
        let amount = amount.min(self.rows.len());
        rand::seq::index::sample(rng, self.rows.len(), amount)
            .into_iter()
            .map(|position| &self.rows[position])
            .collect()
    }
}
