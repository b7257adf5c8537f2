use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Category, PaymentMethod, Region};
use crate::money::Money;

pub type CustomerId = u32;
pub type ProductId = u32;
pub type StoreId = u32;
pub type OrderId = u32;

/// A customer row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    #[serde(rename = "CustomerID")]
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    pub join_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Product {
    #[serde(rename = "ProductID")]
    pub product_id: ProductId,
    pub product_name: String,
    pub category: Category,
    pub price: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Store {
    #[serde(rename = "StoreID")]
    pub store_id: StoreId,
    pub store_name: String,
    pub region: Region,
}

/// An order row. `total_amount` stays zero until the order lines are built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    #[serde(rename = "OrderID")]
    pub order_id: OrderId,
    pub order_date: NaiveDate,
    #[serde(rename = "CustomerID")]
    pub customer_id: CustomerId,
    #[serde(rename = "StoreID")]
    pub store_id: StoreId,
    pub total_amount: Money,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderItem {
    #[serde(rename = "OrderID")]
    pub order_id: OrderId,
    #[serde(rename = "ProductID")]
    pub product_id: ProductId,
    pub quantity: u32,
    pub unit_price: Money,
}

impl OrderItem {
    /// `unit_price * quantity`, or `None` past the money range.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.checked_mul(self.quantity)
    }
}

/// The five tables of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TableName {
    Customers,
    Products,
    Stores,
    Orders,
    OrderItems,
}

impl TableName {
    /// Tables in dependency order.
    pub const ALL: [TableName; 5] = [
        TableName::Customers,
        TableName::Products,
        TableName::Stores,
        TableName::Orders,
        TableName::OrderItems,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TableName::Customers => "customers",
            TableName::Products => "products",
            TableName::Stores => "stores",
            TableName::Orders => "orders",
            TableName::OrderItems => "order_items",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            TableName::Customers => "customers.csv",
            TableName::Products => "products.csv",
            TableName::Stores => "stores.csv",
            TableName::Orders => "orders.csv",
            TableName::OrderItems => "order_items.csv",
        }
    }

    /// Header row of the persisted file.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            TableName::Customers => &["CustomerID", "Name", "Email", "JoinDate"],
            TableName::Products => &["ProductID", "ProductName", "Category", "Price"],
            TableName::Stores => &["StoreID", "StoreName", "Region"],
            TableName::Orders => &[
                "OrderID",
                "OrderDate",
                "CustomerID",
                "StoreID",
                "TotalAmount",
                "PaymentMethod",
            ],
            TableName::OrderItems => &["OrderID", "ProductID", "Quantity", "UnitPrice"],
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete in-memory dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub stores: Vec<Store>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
}

impl Dataset {
    pub fn row_count(&self, table: TableName) -> usize {
        match table {
            TableName::Customers => self.customers.len(),
            TableName::Products => self.products.len(),
            TableName::Stores => self.stores.len(),
            TableName::Orders => self.orders.len(),
            TableName::OrderItems => self.order_items.len(),
        }
    }
}
