use std::path::Path;

use chrono::{Local, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::money::Money;

/// Largest revenue, in cents, a config may be able to produce. Half the
/// `i64` range leaves headroom for per-line rounding.
const MAX_REVENUE_CENTS: f64 = (i64::MAX / 2) as f64;

/// Tuning knobs for one generation run.
///
/// Every field has a default, so a TOML file only needs the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Seed from which every random stream of the run is derived.
    pub seed: u64,
    /// Number of customers to generate.
    pub customers: u32,
    /// Number of products to generate.
    pub products: u32,
    /// Number of stores to generate.
    pub stores: u32,
    /// Number of orders to generate.
    pub orders: u32,
    /// Upper bound of line items per order (capped by the product count).
    pub max_items_per_order: u32,
    /// Smallest quantity of a line item.
    pub quantity_min: u32,
    /// Largest quantity of a line item.
    pub quantity_max: u32,
    /// Lower bound of the unit price multiplier applied to the base price.
    pub variation_min: f64,
    /// Upper bound of the unit price multiplier applied to the base price.
    pub variation_max: f64,
    /// Cheapest base product price.
    pub price_min: f64,
    /// Most expensive base product price.
    pub price_max: f64,
    /// Customers joined at most this many days before the reference date.
    pub join_window_days: u32,
    /// Upper bound for every generated date. Defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            customers: 1000,
            products: 200,
            stores: 25,
            orders: 2500,
            max_items_per_order: 8,
            quantity_min: 1,
            quantity_max: 5,
            variation_min: 0.8,
            variation_max: 1.1,
            price_min: 9.99,
            price_max: 999.99,
            join_window_days: 1095,
            reference_date: None,
        }
    }
}

impl GenerationConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// The "today" used as the upper bound of every generated date.
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn price_bounds(&self) -> (Money, Money) {
        (
            Money::from_f64_rounded(self.price_min),
            Money::from_f64_rounded(self.price_max),
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("customers", self.customers),
            ("products", self.products),
            ("stores", self.stores),
            ("orders", self.orders),
            ("max_items_per_order", self.max_items_per_order),
            ("quantity_min", self.quantity_min),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive")));
            }
        }

        if self.quantity_min > self.quantity_max {
            return Err(ConfigError::Invalid(format!(
                "quantity_min ({}) must be <= quantity_max ({})",
                self.quantity_min, self.quantity_max
            )));
        }

        check_range("variation", self.variation_min, self.variation_max)?;
        check_range("price", self.price_min, self.price_max)?;

        let (price_min, _) = self.price_bounds();
        if price_min.cents() <= 0 {
            return Err(ConfigError::Invalid(
                "price_min must be at least 0.01".to_string(),
            ));
        }

        if self.worst_case_revenue_cents() >= MAX_REVENUE_CENTS {
            return Err(ConfigError::Invalid(format!(
                "price_max ({}) with variation_max ({}) and quantity_max ({}) can overflow order totals",
                self.price_max, self.variation_max, self.quantity_max
            )));
        }

        Ok(())
    }
}

impl GenerationConfig {
    /// Upper bound of the summed `TotalAmount` over all orders.
    fn worst_case_revenue_cents(&self) -> f64 {
        let lines_per_order = self.max_items_per_order.min(self.products);
        (self.price_max * 100.0).round()
            * self.variation_max
            * f64::from(self.quantity_max)
            * f64::from(lines_per_order)
            * f64::from(self.orders)
    }
}

fn check_range(name: &str, min: f64, max: f64) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ConfigError::Invalid(format!(
            "{name} bounds must be finite numbers"
        )));
    }
    if min <= 0.0 {
        return Err(ConfigError::Invalid(format!(
            "{name}_min must be positive"
        )));
    }
    if min > max {
        return Err(ConfigError::Invalid(format!(
            "{name}_min ({min}) must be <= {name}_max ({max})"
        )));
    }
    Ok(())
}
