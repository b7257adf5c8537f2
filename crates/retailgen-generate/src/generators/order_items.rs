use rand::Rng;

use retailgen_core::{GenerationConfig, Money, Order, OrderItem, Product, TableName};

use crate::errors::{GenerationError, Stage};
use crate::foreign::RowIndex;

/// Tuning for line-item generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineItemSettings {
    pub max_items_per_order: u32,
    pub quantity_min: u32,
    pub quantity_max: u32,
    pub variation_min: f64,
    pub variation_max: f64,
}

impl LineItemSettings {
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.max_items_per_order == 0 {
            return Err(GenerationError::invalid(
                "max_items_per_order must be positive",
            ));
        }
        if self.quantity_min == 0 || self.quantity_min > self.quantity_max {
            return Err(GenerationError::invalid(format!(
                "quantity range {}..={} must be positive and ordered",
                self.quantity_min, self.quantity_max
            )));
        }
        let band_ok = self.variation_min.is_finite()
            && self.variation_max.is_finite()
            && self.variation_min > 0.0
            && self.variation_min <= self.variation_max;
        if !band_ok {
            return Err(GenerationError::invalid(format!(
                "variation band {}..={} must be positive and ordered",
                self.variation_min, self.variation_max
            )));
        }
        Ok(())
    }
}

impl From<&GenerationConfig> for LineItemSettings {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            max_items_per_order: config.max_items_per_order,
            quantity_min: config.quantity_min,
            quantity_max: config.quantity_max,
            variation_min: config.variation_min,
            variation_max: config.variation_max,
        }
    }
}

/// Build the line items of every order and back-fill `total_amount`.
///
/// Each order gets between one and `max_items_per_order` distinct products
/// (fewer when the catalog is smaller). The unit price is the product price
/// scaled by a factor drawn from the variation band and rounded to cents;
/// the order total is the exact sum of `unit_price * quantity`.
pub fn generate_order_items<R: Rng + ?Sized>(
    orders: &mut [Order],
    products: &[Product],
    settings: &LineItemSettings,
    rng: &mut R,
) -> Result<Vec<OrderItem>, GenerationError> {
    settings.validate()?;
    if orders.is_empty() {
        return Err(GenerationError::MissingInput {
            stage: Stage::OrderItems,
            table: TableName::Orders,
        });
    }
    let per_order = (settings.max_items_per_order as usize).min(products.len());
    let products = RowIndex::require(Stage::OrderItems, TableName::Products, products)?;

    let mut items = Vec::with_capacity(orders.len().saturating_mul(per_order.div_ceil(2)));
    for order in orders.iter_mut() {
        let wanted = rng.random_range(1..=settings.max_items_per_order) as usize;
        let mut total = Money::ZERO;

        for product in products.sample_distinct(rng, wanted) {
            let variation = rng.random_range(settings.variation_min..=settings.variation_max);
            let unit_price = product
                .price
                .scale_rounded(variation)
                .max(Money::from_cents(1));
            let quantity = rng.random_range(settings.quantity_min..=settings.quantity_max);

            let item = OrderItem {
                order_id: order.order_id,
                product_id: product.product_id,
                quantity,
                unit_price,
            };
            total = item
                .line_total()
                .and_then(|line_total| total.checked_add(line_total))
                .ok_or_else(|| {
                    GenerationError::invalid(format!(
                        "total of order {} exceeds the money range",
                        order.order_id
                    ))
                })?;
            items.push(item);
        }

        order.total_amount = total;
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use retailgen_core::{Category, ConfigError, PaymentMethod};

    use super::*;

    fn settings() -> LineItemSettings {
        LineItemSettings::from(&GenerationConfig::default())
    }

    fn products(count: u32) -> Vec<Product> {
        (1..=count)
            .map(|product_id| Product {
                product_id,
                product_name: format!("Acme Lamp {product_id}"),
                category: Category::HomeGarden,
                price: Money::from_cents(1000 + i64::from(product_id) * 37),
            })
            .collect()
    }

    fn orders(count: u32) -> Vec<Order> {
        (1..=count)
            .map(|order_id| Order {
                order_id,
                order_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                customer_id: 1,
                store_id: 1,
                total_amount: Money::ZERO,
                payment_method: PaymentMethod::Cash,
            })
            .collect()
    }

    #[test]
    fn totals_are_back_filled_from_items() {
        let catalog = products(30);
        let mut orders = orders(100);
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let items = generate_order_items(&mut orders, &catalog, &settings(), &mut rng).unwrap();

        let mut sums: HashMap<u32, Money> = HashMap::new();
        for item in &items {
            *sums.entry(item.order_id).or_default() += item.line_total().unwrap();
        }
        for order in &orders {
            assert!(order.total_amount > Money::ZERO);
            assert_eq!(sums.get(&order.order_id), Some(&order.total_amount));
        }
    }

    #[test]
    fn small_catalog_caps_items_without_repeats() {
        let catalog = products(2);
        let mut orders = orders(50);
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let items = generate_order_items(&mut orders, &catalog, &settings(), &mut rng).unwrap();

        let mut per_order: HashMap<u32, HashSet<u32>> = HashMap::new();
        for item in &items {
            assert!(
                per_order
                    .entry(item.order_id)
                    .or_default()
                    .insert(item.product_id),
                "product repeated in order {}",
                item.order_id
            );
        }
        assert!(per_order.values().all(|products| products.len() <= 2));
        assert_eq!(per_order.len(), 50);
    }

    #[test]
    fn fixed_band_and_quantity_are_respected() {
        let catalog = products(10);
        let mut orders = orders(20);
        let fixed = LineItemSettings {
            max_items_per_order: 1,
            quantity_min: 3,
            quantity_max: 3,
            variation_min: 1.0,
            variation_max: 1.0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let items = generate_order_items(&mut orders, &catalog, &fixed, &mut rng).unwrap();
        assert_eq!(items.len(), 20);
        for item in &items {
            let product = &catalog[item.product_id as usize - 1];
            assert_eq!(item.unit_price, product.price);
            assert_eq!(item.quantity, 3);
        }
    }

    #[test]
    fn empty_products_is_missing_input() {
        let mut orders = orders(1);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let result = generate_order_items(&mut orders, &[], &settings(), &mut rng);
        assert!(matches!(
            result,
            Err(GenerationError::MissingInput {
                stage: Stage::OrderItems,
                table: TableName::Products
            })
        ));
    }

    #[test]
    fn huge_item_cap_is_bounded_by_catalog() {
        let catalog = products(5);
        let mut orders = orders(2500);
        let unbounded = LineItemSettings {
            max_items_per_order: u32::MAX,
            ..settings()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let items = generate_order_items(&mut orders, &catalog, &unbounded, &mut rng).unwrap();
        assert!((2500..=2500 * 5).contains(&items.len()));
    }

    #[test]
    fn overflowing_total_is_an_error() {
        let catalog = vec![Product {
            product_id: 1,
            product_name: "Acme Yacht Max".to_string(),
            category: Category::SportsFitness,
            price: Money::from_cents(i64::MAX / 2),
        }];
        let mut orders = orders(1);
        let settings = LineItemSettings {
            quantity_min: 3,
            quantity_max: 3,
            variation_min: 1.0,
            variation_max: 1.0,
            ..settings()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let result = generate_order_items(&mut orders, &catalog, &settings, &mut rng);
        assert!(matches!(
            result,
            Err(GenerationError::Config(ConfigError::Invalid(ref msg))) if msg.contains("order 1")
        ));
    }

    #[test]
    fn inverted_band_is_rejected() {
        let bad = LineItemSettings {
            variation_min: 1.2,
            variation_max: 0.9,
            ..settings()
        };
        assert!(matches!(bad.validate(), Err(GenerationError::Config(_))));
    }
}
