use chrono::NaiveDate;

use retailgen_core::Money;

use crate::summary::{DatasetSummary, Share};

const TOP_CATEGORIES: usize = 5;
const TOP_REGIONS: usize = 5;
const TOP_REVENUE_REGIONS: usize = 3;

/// Render the summary printed after a generation run.
pub fn render_generation_summary(summary: &DatasetSummary) -> String {
    let mut lines = Vec::new();

    lines.push("# Generated Data Summary".to_string());
    lines.push(String::new());
    lines.push("## General statistics".to_string());
    lines.push(format!("- customers: {}", group_thousands(summary.customers.count)));
    lines.push(format!("- products: {}", group_thousands(summary.products.count)));
    lines.push(format!("- stores: {}", group_thousands(summary.stores.count)));
    lines.push(format!("- orders: {}", group_thousands(summary.orders.count)));
    lines.push(format!(
        "- order items: {}",
        group_thousands(summary.order_items.count)
    ));
    lines.push(String::new());

    let orders = &summary.orders;
    lines.push("## Financial analysis".to_string());
    lines.push(format!("- total sales: {}", dollars(orders.revenue_total)));
    lines.push(format!("- average order: {}", dollars(orders.order_value_mean)));
    lines.push(format!("- minimum order: {}", dollars(orders.order_value_min)));
    lines.push(format!("- maximum order: {}", dollars(orders.order_value_max)));
    lines.push(String::new());

    lines.push("## Data period".to_string());
    lines.push(format!("- first order: {}", date_or_dash(orders.first_order_date)));
    lines.push(format!("- last order: {}", date_or_dash(orders.last_order_date)));
    lines.push(String::new());

    lines.push("## Distribution by region".to_string());
    for share in summary.stores.regions.iter().take(TOP_REGIONS) {
        lines.push(format!("- {}: {} stores", share.label, share.count));
    }
    lines.push(String::new());

    lines.push(format!("## Top {TOP_CATEGORIES} product categories"));
    for share in summary.products.categories.iter().take(TOP_CATEGORIES) {
        lines.push(format!("- {}: {} products", share.label, share.count));
    }
    lines.push(String::new());

    lines.push("## Payment methods".to_string());
    lines.extend(summary.orders.payment_methods.iter().map(share_line));
    lines.join("\n")
}

/// Render the detailed report of `retailgen analyze`.
pub fn render_analysis_report(summary: &DatasetSummary) -> String {
    let mut lines = Vec::new();

    lines.push("# Detailed Data Analysis".to_string());
    lines.push(String::new());

    let customers = &summary.customers;
    lines.push("## Customers".to_string());
    lines.push(format!("- total customers: {}", group_thousands(customers.count)));
    lines.push(format!("- sample names: {}", customers.sample_names.join(", ")));
    let domains: Vec<String> = customers
        .top_email_domains
        .iter()
        .map(|share| format!("{} ({})", share.label, share.count))
        .collect();
    lines.push(format!("- email domains: {}", domains.join(", ")));
    lines.push(String::new());

    let products = &summary.products;
    lines.push("## Products".to_string());
    lines.push(format!("- total products: {}", group_thousands(products.count)));
    lines.push(format!(
        "- price range: {} - {}",
        dollars(products.price_min),
        dollars(products.price_max)
    ));
    lines.push(format!("- average price: {}", dollars(products.price_mean)));
    lines.push("- category distribution:".to_string());
    for share in products.categories.iter().take(TOP_CATEGORIES) {
        lines.push(format!("  - {}: {} products", share.label, share.count));
    }
    lines.push(String::new());

    lines.push("## Stores".to_string());
    lines.push(format!(
        "- total stores: {}",
        group_thousands(summary.stores.count)
    ));
    lines.push("- regional distribution:".to_string());
    for share in &summary.stores.regions {
        lines.push(format!("  - {}: {} stores", share.label, share.count));
    }
    lines.push(String::new());

    let orders = &summary.orders;
    lines.push("## Orders".to_string());
    lines.push(format!("- total orders: {}", group_thousands(orders.count)));
    lines.push(format!("- total revenue: {}", dollars(orders.revenue_total)));
    lines.push(format!(
        "- average order value: {}",
        dollars(orders.order_value_mean)
    ));
    lines.push(format!(
        "- date range: {} to {}",
        date_or_dash(orders.first_order_date),
        date_or_dash(orders.last_order_date)
    ));
    lines.push("- payment method distribution:".to_string());
    for share in &orders.payment_methods {
        lines.push(format!("  {}", share_line(share)));
    }
    lines.push(String::new());

    let items = &summary.order_items;
    lines.push("## Order items".to_string());
    lines.push(format!("- total order items: {}", group_thousands(items.count)));
    lines.push(format!(
        "- average items per order: {:.1}",
        items.items_per_order_mean
    ));
    lines.push(format!(
        "- quantity range: {} - {}",
        items.quantity_min, items.quantity_max
    ));
    lines.push(format!(
        "- average quantity per item: {:.1}",
        items.quantity_mean
    ));
    lines.push(String::new());

    let relationships = &summary.relationships;
    lines.push("## Relationships".to_string());
    lines.push(format!(
        "- max orders per customer: {}",
        relationships.max_orders_per_customer
    ));
    lines.push(format!(
        "- average orders per customer: {:.1}",
        relationships.mean_orders_per_customer
    ));
    lines.push(format!("- top {TOP_REVENUE_REGIONS} regions by revenue:"));
    for entry in relationships
        .revenue_by_region
        .iter()
        .take(TOP_REVENUE_REGIONS)
    {
        lines.push(format!("  - {}: {}", entry.region, dollars(entry.revenue)));
    }
    if relationships.orders_without_store > 0 {
        lines.push(format!(
            "- orders without a matching store: {}",
            relationships.orders_without_store
        ));
    }
    lines.join("\n")
}

fn share_line(share: &Share) -> String {
    format!(
        "- {}: {} ({:.1}%)",
        share.label,
        group_thousands(share.count),
        share.percentage
    )
}

fn date_or_dash(date: Option<NaiveDate>) -> String {
    date.map(|date| date.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// `$1,234.50` style amount.
fn dollars(amount: Money) -> String {
    let cents = amount.cents();
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(abs / 100), abs % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn dollars_keep_two_decimals() {
        assert_eq!(dollars(Money::from_cents(123456789)), "$1,234,567.89");
        assert_eq!(dollars(Money::from_cents(5)), "$0.05");
        assert_eq!(dollars(Money::from_cents(-250)), "-$2.50");
    }
}
