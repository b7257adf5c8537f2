use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

use retailgen_core::{Dataset, Money};
use retailgen_generate::RowIndex;

/// Number of sample names kept in the customer section.
const SAMPLE_NAMES: usize = 3;
/// Number of email domains kept in the customer section.
const TOP_DOMAINS: usize = 3;

/// One bucket of a categorical distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Share {
    pub label: String,
    pub count: u64,
    /// Share of the table, in percent.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSummary {
    pub count: u64,
    pub sample_names: Vec<String>,
    pub top_email_domains: Vec<Share>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductSummary {
    pub count: u64,
    pub price_min: Money,
    pub price_max: Money,
    pub price_mean: Money,
    pub categories: Vec<Share>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSummary {
    pub count: u64,
    pub regions: Vec<Share>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub count: u64,
    pub revenue_total: Money,
    pub order_value_mean: Money,
    pub order_value_min: Money,
    pub order_value_max: Money,
    pub first_order_date: Option<NaiveDate>,
    pub last_order_date: Option<NaiveDate>,
    pub payment_methods: Vec<Share>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItemSummary {
    pub count: u64,
    pub items_per_order_mean: f64,
    pub quantity_min: u32,
    pub quantity_max: u32,
    pub quantity_mean: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRevenue {
    pub region: String,
    pub revenue: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelationshipSummary {
    /// Most orders placed by a single customer.
    pub max_orders_per_customer: u64,
    /// Mean over customers with at least one order.
    pub mean_orders_per_customer: f64,
    /// Descending by revenue.
    pub revenue_by_region: Vec<RegionRevenue>,
    /// Orders whose StoreID has no matching store; left out of the regions.
    pub orders_without_store: u64,
}

/// Descriptive statistics over all five tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub customers: CustomerSummary,
    pub products: ProductSummary,
    pub stores: StoreSummary,
    pub orders: OrderSummary,
    pub order_items: OrderItemSummary,
    pub relationships: RelationshipSummary,
}

impl DatasetSummary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            customers: summarize_customers(dataset),
            products: summarize_products(dataset),
            stores: summarize_stores(dataset),
            orders: summarize_orders(dataset),
            order_items: summarize_order_items(dataset),
            relationships: summarize_relationships(dataset),
        }
    }
}

fn summarize_customers(dataset: &Dataset) -> CustomerSummary {
    let customers = &dataset.customers;
    let domains = customers
        .iter()
        .filter_map(|customer| customer.email.split_once('@'))
        .map(|(_, domain)| domain.to_string());
    let mut top_email_domains = distribution(domains, customers.len());
    top_email_domains.truncate(TOP_DOMAINS);

    CustomerSummary {
        count: customers.len() as u64,
        sample_names: customers
            .iter()
            .take(SAMPLE_NAMES)
            .map(|customer| customer.name.clone())
            .collect(),
        top_email_domains,
    }
}

fn summarize_products(dataset: &Dataset) -> ProductSummary {
    let products = &dataset.products;
    let prices = products.iter().map(|product| product.price);
    ProductSummary {
        count: products.len() as u64,
        price_min: prices.clone().min().unwrap_or(Money::ZERO),
        price_max: prices.clone().max().unwrap_or(Money::ZERO),
        price_mean: mean_money(prices.sum(), products.len()),
        categories: distribution(
            products.iter().map(|product| product.category.to_string()),
            products.len(),
        ),
    }
}

fn summarize_stores(dataset: &Dataset) -> StoreSummary {
    let stores = &dataset.stores;
    StoreSummary {
        count: stores.len() as u64,
        regions: distribution(
            stores.iter().map(|store| store.region.to_string()),
            stores.len(),
        ),
    }
}

fn summarize_orders(dataset: &Dataset) -> OrderSummary {
    let orders = &dataset.orders;
    let totals = orders.iter().map(|order| order.total_amount);
    let dates = orders.iter().map(|order| order.order_date);
    let revenue_total: Money = totals.clone().sum();

    OrderSummary {
        count: orders.len() as u64,
        revenue_total,
        order_value_mean: mean_money(revenue_total, orders.len()),
        order_value_min: totals.clone().min().unwrap_or(Money::ZERO),
        order_value_max: totals.max().unwrap_or(Money::ZERO),
        first_order_date: dates.clone().min(),
        last_order_date: dates.max(),
        payment_methods: distribution(
            orders.iter().map(|order| order.payment_method.to_string()),
            orders.len(),
        ),
    }
}

fn summarize_order_items(dataset: &Dataset) -> OrderItemSummary {
    let items = &dataset.order_items;
    let quantities = items.iter().map(|item| item.quantity);
    let quantity_total: u64 = quantities.clone().map(u64::from).sum();

    OrderItemSummary {
        count: items.len() as u64,
        items_per_order_mean: ratio(items.len() as u64, dataset.orders.len()),
        quantity_min: quantities.clone().min().unwrap_or(0),
        quantity_max: quantities.max().unwrap_or(0),
        quantity_mean: ratio(quantity_total, items.len()),
    }
}

fn summarize_relationships(dataset: &Dataset) -> RelationshipSummary {
    let mut orders_per_customer: HashMap<u32, u64> = HashMap::new();
    for order in &dataset.orders {
        *orders_per_customer.entry(order.customer_id).or_default() += 1;
    }

    let stores = RowIndex::new(&dataset.stores);
    let mut revenue: BTreeMap<String, Money> = BTreeMap::new();
    let mut orders_without_store = 0;
    for order in &dataset.orders {
        match stores.get(order.store_id) {
            Some(store) => {
                *revenue.entry(store.region.to_string()).or_default() += order.total_amount;
            }
            None => orders_without_store += 1,
        }
    }
    let mut revenue_by_region: Vec<RegionRevenue> = revenue
        .into_iter()
        .map(|(region, revenue)| RegionRevenue { region, revenue })
        .collect();
    revenue_by_region.sort_by(|a, b| b.revenue.cmp(&a.revenue));

    RelationshipSummary {
        max_orders_per_customer: orders_per_customer.values().copied().max().unwrap_or(0),
        mean_orders_per_customer: ratio(dataset.orders.len() as u64, orders_per_customer.len()),
        revenue_by_region,
        orders_without_store,
    }
}

/// Count labels, most frequent first; ties keep label order.
fn distribution(labels: impl Iterator<Item = String>, total: usize) -> Vec<Share> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    let mut shares: Vec<Share> = counts
        .into_iter()
        .map(|(label, count)| Share {
            label,
            count,
            percentage: ratio(count, total) * 100.0,
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

fn ratio(numerator: u64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn mean_money(total: Money, count: usize) -> Money {
    if count == 0 {
        return Money::ZERO;
    }
    Money::from_cents((total.cents() as f64 / count as f64).round() as i64)
}
