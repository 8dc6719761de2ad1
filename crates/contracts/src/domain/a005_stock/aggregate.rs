use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::validation;

/// Composite key of a stock row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockKey {
    pub store_id: i32,
    pub product_id: i32,
}

impl std::fmt::Display for StockKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "store {} / product {}", self.store_id, self.product_id)
    }
}

/// Quantity of one product on hand at one store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub store_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

impl Stock {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &["store_id", "product_id", "quantity"];

    pub fn validate(&self) -> Result<(), String> {
        validation::non_negative(self.quantity, "quantity")
    }

    pub fn key(&self) -> StockKey {
        StockKey {
            store_id: self.store_id,
            product_id: self.product_id,
        }
    }
}

impl AggregateRoot for Stock {
    fn element_name() -> &'static str {
        "Stock record"
    }
}

/// PATCH payload; `quantity` is mandatory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockPatch {
    pub quantity: Option<i32>,
}

/// Stock row with store and product names resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockView {
    pub store_id: i32,
    pub store_name: String,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_quantity_is_rejected() {
        let stock = Stock {
            store_id: 1,
            product_id: 1,
            quantity: -3,
        };
        assert_eq!(stock.validate().unwrap_err(), "quantity must not be negative");
    }
}
