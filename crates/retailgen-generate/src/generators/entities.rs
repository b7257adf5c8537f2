use chrono::{Days, NaiveDate};
use fake::Fake;
use fake::faker::company::en::{CompanyName, CompanySuffix};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use rand::Rng;

use retailgen_core::{Category, Customer, Money, Product, Region, STORE_TYPES, Store};

use super::ensure_positive;
use crate::errors::GenerationError;

/// Customers with ids `1..=count`, joined within `join_window_days` before
/// `reference_date`.
pub fn generate_customers<R: Rng + ?Sized>(
    count: u32,
    reference_date: NaiveDate,
    join_window_days: u32,
    rng: &mut R,
) -> Result<Vec<Customer>, GenerationError> {
    ensure_positive("customers", count)?;
    let earliest = reference_date
        .checked_sub_days(Days::new(u64::from(join_window_days)))
        .ok_or_else(|| {
            GenerationError::invalid(format!(
                "join_window_days ({join_window_days}) reaches before the supported calendar"
            ))
        })?;

    let mut customers = Vec::with_capacity(count as usize);
    for customer_id in 1..=count {
        let name: String = Name().fake_with_rng(rng);
        let email: String = SafeEmail().fake_with_rng(rng);
        let offset = rng.random_range(0..=u64::from(join_window_days));
        let join_date = earliest
            .checked_add_days(Days::new(offset))
            .unwrap_or(reference_date);
        customers.push(Customer {
            customer_id,
            name,
            email,
            join_date,
        });
    }
    Ok(customers)
}

/// Products with ids `1..=count` named `{brand} {base_product} {model}`.
pub fn generate_products<R: Rng + ?Sized>(
    count: u32,
    price_min: Money,
    price_max: Money,
    rng: &mut R,
) -> Result<Vec<Product>, GenerationError> {
    ensure_positive("products", count)?;
    if price_min.cents() <= 0 || price_min > price_max {
        return Err(GenerationError::invalid(format!(
            "price range {price_min}..={price_max} is not a positive range"
        )));
    }

    let mut products = Vec::with_capacity(count as usize);
    for product_id in 1..=count {
        let category = Category::ALL[rng.random_range(0..Category::ALL.len())];
        let base_products = category.base_products();
        let base_product = base_products[rng.random_range(0..base_products.len())];
        let brand: String = CompanyName().fake_with_rng(rng);
        let model: String = Word().fake_with_rng(rng);
        let price = Money::from_cents(rng.random_range(price_min.cents()..=price_max.cents()));

        products.push(Product {
            product_id,
            product_name: format!("{brand} {base_product} {}", capitalize(&model)),
            category,
            price,
        });
    }
    Ok(products)
}

pub fn generate_stores<R: Rng + ?Sized>(
    count: u32,
    rng: &mut R,
) -> Result<Vec<Store>, GenerationError> {
    ensure_positive("stores", count)?;

    let mut stores = Vec::with_capacity(count as usize);
    for store_id in 1..=count {
        let region = Region::ALL[rng.random_range(0..Region::ALL.len())];
        let store_type = STORE_TYPES[rng.random_range(0..STORE_TYPES.len())];
        let suffix: String = CompanySuffix().fake_with_rng(rng);
        stores.push(Store {
            store_id,
            store_name: format!("{store_type} {suffix} {region}"),
            region,
        });
    }
    Ok(stores)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn customers_are_sequential_and_inside_window() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let customers = generate_customers(120, reference(), 30, &mut rng).unwrap();
        assert_eq!(customers.len(), 120);
        for (idx, customer) in customers.iter().enumerate() {
            assert_eq!(customer.customer_id, idx as u32 + 1);
            assert!(customer.join_date <= reference());
            assert!(customer.join_date >= NaiveDate::from_ymd_opt(2024, 5, 31).unwrap());
            assert!(customer.email.contains('@'));
        }
    }

    #[test]
    fn zero_window_joins_on_reference_date() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let customers = generate_customers(10, reference(), 0, &mut rng).unwrap();
        assert!(customers.iter().all(|c| c.join_date == reference()));
    }

    #[test]
    fn products_use_catalog_and_price_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let min = Money::from_cents(999);
        let max = Money::from_cents(99999);
        let products = generate_products(200, min, max, &mut rng).unwrap();
        for product in &products {
            assert!(product.price >= min && product.price <= max);
            assert!(
                product
                    .category
                    .base_products()
                    .iter()
                    .any(|base| product.product_name.contains(base)),
                "{} does not mention a base product of {}",
                product.product_name,
                product.category
            );
        }
    }

    #[test]
    fn store_names_end_with_region() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let stores = generate_stores(25, &mut rng).unwrap();
        assert_eq!(stores.len(), 25);
        for store in &stores {
            assert!(store.store_name.ends_with(store.region.label()));
        }
    }

    #[test]
    fn zero_count_is_a_config_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        assert!(matches!(
            generate_stores(0, &mut rng),
            Err(GenerationError::Config(_))
        ));
    }

    #[test]
    fn capitalize_lowercases_tail() {
        assert_eq!(capitalize("voluptas"), "Voluptas");
        assert_eq!(capitalize("ABC"), "Abc");
        assert_eq!(capitalize(""), "");
    }
}
