//! Fixed label pools used by the entity generators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Product category. Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    #[serde(rename = "Clothing & Fashion")]
    ClothingFashion,
    #[serde(rename = "Home & Garden")]
    HomeGarden,
    #[serde(rename = "Sports & Fitness")]
    SportsFitness,
    #[serde(rename = "Books & Media")]
    BooksMedia,
    #[serde(rename = "Toys & Games")]
    ToysGames,
    #[serde(rename = "Beauty & Personal Care")]
    BeautyPersonalCare,
    #[serde(rename = "Automotive & Tools")]
    AutomotiveTools,
    #[serde(rename = "Food & Beverages")]
    FoodBeverages,
    #[serde(rename = "Health & Wellness")]
    HealthWellness,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Electronics,
        Category::ClothingFashion,
        Category::HomeGarden,
        Category::SportsFitness,
        Category::BooksMedia,
        Category::ToysGames,
        Category::BeautyPersonalCare,
        Category::AutomotiveTools,
        Category::FoodBeverages,
        Category::HealthWellness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::ClothingFashion => "Clothing & Fashion",
            Category::HomeGarden => "Home & Garden",
            Category::SportsFitness => "Sports & Fitness",
            Category::BooksMedia => "Books & Media",
            Category::ToysGames => "Toys & Games",
            Category::BeautyPersonalCare => "Beauty & Personal Care",
            Category::AutomotiveTools => "Automotive & Tools",
            Category::FoodBeverages => "Food & Beverages",
            Category::HealthWellness => "Health & Wellness",
        }
    }

    /// Representative base products used to synthesize product names.
    pub fn base_products(self) -> &'static [&'static str] {
        match self {
            Category::Electronics => &[
                "Smartphone",
                "Laptop",
                "Tablet",
                "Headphones",
                "Smartwatch",
                "Camera",
                "TV",
                "Gaming Console",
            ],
            Category::ClothingFashion => &[
                "T-Shirt",
                "Jeans",
                "Dress",
                "Jacket",
                "Shoes",
                "Handbag",
                "Watch",
                "Sunglasses",
            ],
            Category::HomeGarden => &[
                "Sofa",
                "Table",
                "Lamp",
                "Rug",
                "Curtains",
                "Plant Pot",
                "Tools",
                "Decoration",
            ],
            Category::SportsFitness => &[
                "Sneakers",
                "Bicycle",
                "Ball",
                "Weights",
                "Racket",
                "Helmet",
                "Sportswear",
            ],
            Category::BooksMedia => &[
                "Novel",
                "Manual",
                "Magazine",
                "DVD",
                "Video Game",
                "Audiobook",
                "Comic",
            ],
            Category::ToysGames => &[
                "Doll",
                "Puzzle",
                "Board Game",
                "Stuffed Animal",
                "LEGO",
                "Kids Video Game",
            ],
            Category::BeautyPersonalCare => &[
                "Cream",
                "Shampoo",
                "Makeup",
                "Perfume",
                "Brush",
                "Treatment",
            ],
            Category::AutomotiveTools => {
                &["Motor Oil", "Tire", "Screwdriver", "Drill", "Battery"]
            }
            Category::FoodBeverages => &[
                "Coffee",
                "Tea",
                "Snacks",
                "Canned Food",
                "Energy Drink",
                "Supplement",
            ],
            Category::HealthWellness => &[
                "Vitamins",
                "Thermometer",
                "Medicine",
                "Supplement",
                "Medical Equipment",
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Store region (US state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    California,
    Texas,
    Florida,
    #[serde(rename = "New York")]
    NewYork,
    Illinois,
    Pennsylvania,
    Ohio,
    Georgia,
    #[serde(rename = "North Carolina")]
    NorthCarolina,
    Michigan,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::California,
        Region::Texas,
        Region::Florida,
        Region::NewYork,
        Region::Illinois,
        Region::Pennsylvania,
        Region::Ohio,
        Region::Georgia,
        Region::NorthCarolina,
        Region::Michigan,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::California => "California",
            Region::Texas => "Texas",
            Region::Florida => "Florida",
            Region::NewYork => "New York",
            Region::Illinois => "Illinois",
            Region::Pennsylvania => "Pennsylvania",
            Region::Ohio => "Ohio",
            Region::Georgia => "Georgia",
            Region::NorthCarolina => "North Carolina",
            Region::Michigan => "Michigan",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    PayPal,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::PayPal,
        PaymentMethod::BankTransfer,
        PaymentMethod::Cash,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Cash => "Cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Store type prefixes for synthesized store names.
pub const STORE_TYPES: &[&str] = &["Mall", "Store", "Outlet", "Megastore", "Plaza", "Center"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_labels_match_display() {
        for category in Category::ALL {
            let encoded = serde_json::to_string(&category).unwrap();
            assert_eq!(encoded, format!("\"{}\"", category.label()));
            assert!(!category.base_products().is_empty());
        }
        for region in Region::ALL {
            let encoded = serde_json::to_string(&region).unwrap();
            assert_eq!(encoded, format!("\"{}\"", region.label()));
        }
        for method in PaymentMethod::ALL {
            let encoded = serde_json::to_string(&method).unwrap();
            assert_eq!(encoded, format!("\"{}\"", method.label()));
        }
    }
}
