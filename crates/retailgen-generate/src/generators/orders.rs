use chrono::{Days, NaiveDate};
use rand::Rng;

use retailgen_core::{Customer, Money, Order, PaymentMethod, Store, TableName};

use super::ensure_positive;
use crate::errors::{GenerationError, Stage};
use crate::foreign::RowIndex;

/// Orders with ids `1..=count` and a zero `total_amount`.
///
/// Customers and stores are picked uniformly with replacement. The order
/// date is uniform over `[customer.join_date, reference_date]`; a customer
/// who joined on (or after) the reference date orders on the join date.
pub fn generate_orders<R: Rng + ?Sized>(
    customers: &[Customer],
    stores: &[Store],
    count: u32,
    reference_date: NaiveDate,
    rng: &mut R,
) -> Result<Vec<Order>, GenerationError> {
    ensure_positive("orders", count)?;
    let customers = RowIndex::require(Stage::Orders, TableName::Customers, customers)?;
    let stores = RowIndex::require(Stage::Orders, TableName::Stores, stores)?;

    let mut orders = Vec::with_capacity(count as usize);
    for order_id in 1..=count {
        let customer = customers.pick(rng).ok_or(GenerationError::MissingInput {
            stage: Stage::Orders,
            table: TableName::Customers,
        })?;
        let order_date = order_date_after(customer.join_date, reference_date, rng);
        let store = stores.pick(rng).ok_or(GenerationError::MissingInput {
            stage: Stage::Orders,
            table: TableName::Stores,
        })?;
        let payment_method = PaymentMethod::ALL[rng.random_range(0..PaymentMethod::ALL.len())];

        orders.push(Order {
            order_id,
            order_date,
            customer_id: customer.customer_id,
            store_id: store.store_id,
            total_amount: Money::ZERO,
            payment_method,
        });
    }
    Ok(orders)
}

fn order_date_after<R: Rng + ?Sized>(
    join_date: NaiveDate,
    reference_date: NaiveDate,
    rng: &mut R,
) -> NaiveDate {
    let span = (reference_date - join_date).num_days();
    if span <= 0 {
        return join_date;
    }
    let offset = rng.random_range(0..=span as u64);
    join_date
        .checked_add_days(Days::new(offset))
        .unwrap_or(reference_date)
}
