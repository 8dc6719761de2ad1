use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::shared::money::{self, PRICE_SCALE};
use crate::shared::patch;

/// Composite key of an order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderItemKey {
    pub order_id: i32,
    pub item_id: i32,
}

impl std::fmt::Display for OrderItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order {} / item {}", self.order_id, self.item_id)
    }
}

/// Order line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: i32,
    pub item_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub list_price: Decimal,
    /// Fraction between 0 and 1 (0.20 = 20 % off)
    #[serde(default)]
    pub discount: Decimal,
}

impl OrderItem {
    pub const REQUIRED_FIELDS: &'static [&'static str] =
        &["order_id", "item_id", "product_id", "quantity", "list_price"];

    pub fn validate(&self) -> Result<(), String> {
        if self.item_id <= 0 {
            return Err("item_id must be positive".into());
        }
        if self.quantity <= 0 {
            return Err("quantity must be positive".into());
        }
        if self.list_price.is_sign_negative() {
            return Err("list_price must not be negative".into());
        }
        if self.discount.is_sign_negative() || self.discount > Decimal::ONE {
            return Err("discount must be between 0 and 1".into());
        }
        Ok(())
    }

    pub fn apply_patch(&mut self, dto: &OrderItemPatch) -> bool {
        let mut changed = patch::apply(&mut self.product_id, &dto.product_id);
        changed |= patch::apply(&mut self.quantity, &dto.quantity);
        changed |= patch::apply(&mut self.list_price, &dto.list_price);
        changed |= patch::apply(&mut self.discount, &dto.discount);
        changed
    }

    pub fn before_write(&mut self) {
        self.list_price = money::with_scale(self.list_price, PRICE_SCALE);
        self.discount = money::with_scale(self.discount, PRICE_SCALE);
    }

    pub fn key(&self) -> OrderItemKey {
        OrderItemKey {
            order_id: self.order_id,
            item_id: self.item_id,
        }
    }

    /// quantity × list_price × (1 − discount), rounded to cents
    pub fn line_total(&self) -> Decimal {
        let gross = Decimal::from(self.quantity) * self.list_price;
        money::with_scale(gross * (Decimal::ONE - self.discount), PRICE_SCALE)
    }
}

impl AggregateRoot for OrderItem {
    fn element_name() -> &'static str {
        "Order item"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderItemPatch {
    pub product_id: Option<i32>,
    pub quantity: Option<i32>,
    pub list_price: Option<Decimal>,
    pub discount: Option<Decimal>,
}

/// Order line with the product name and line total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemView {
    #[serde(flatten)]
    pub item: OrderItem,
    pub product_name: Option<String>,
    pub line_total: Decimal,
}

impl OrderItemView {
    pub fn new(item: OrderItem, product_name: Option<String>) -> Self {
        let line_total = item.line_total();
        Self {
            item,
            product_name,
            line_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn line(quantity: i32, price: &str, discount: &str) -> OrderItem {
        OrderItem {
            order_id: 1,
            item_id: 1,
            product_id: 1,
            quantity,
            list_price: Decimal::from_str(price).unwrap(),
            discount: Decimal::from_str(discount).unwrap(),
        }
    }

    #[test]
    fn test_line_total_applies_discount() {
        assert_eq!(line(2, "599.99", "0.20").line_total().to_string(), "959.98");
        assert_eq!(line(1, "1000", "0").line_total().to_string(), "1000.00");
    }

    #[test]
    fn test_discount_defaults_to_zero() {
        let item: OrderItem = serde_json::from_str(
            r#"{"order_id": 1, "item_id": 2, "product_id": 1, "quantity": 1, "list_price": 500}"#,
        )
        .unwrap();
        assert_eq!(item.discount, Decimal::ZERO);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_validate_ranges() {
        assert!(line(0, "10", "0").validate().is_err());
        assert!(line(1, "10", "1.5").validate().is_err());
        assert!(line(1, "-10", "0").validate().is_err());
    }
}
