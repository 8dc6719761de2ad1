use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::a009_order_item::aggregate::OrderItemView;
use crate::domain::common::AggregateRoot;
use crate::enums::order_status::OrderStatus;
use crate::shared::patch::{self, double_option};

/// Sales order header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i32,
    /// Walk-in sales have no customer
    #[serde(default)]
    pub customer_id: Option<i32>,
    pub order_status: OrderStatus,
    /// `None` when the stored value is not a calendar date
    pub order_date: Option<NaiveDate>,
    pub required_date: Option<NaiveDate>,
    #[serde(default)]
    pub shipped_date: Option<NaiveDate>,
    pub store_id: i32,
    pub staff_id: i32,
}

impl Order {
    pub const REQUIRED_FIELDS: &'static [&'static str] = &[
        "order_id",
        "order_status",
        "order_date",
        "required_date",
        "store_id",
        "staff_id",
    ];

    pub fn validate(&self) -> Result<(), String> {
        let Some(order_date) = self.order_date else {
            return Err("order_date must be a valid date (YYYY-MM-DD)".into());
        };
        if self.required_date.is_none() {
            return Err("required_date must be a valid date (YYYY-MM-DD)".into());
        }
        if let Some(shipped) = self.shipped_date {
            if shipped < order_date {
                return Err("shipped_date must not be earlier than order_date".into());
            }
        }
        Ok(())
    }

    pub fn apply_patch(&mut self, dto: &OrderPatch) -> bool {
        let mut changed = patch::apply(&mut self.customer_id, &dto.customer_id);
        changed |= patch::apply(&mut self.order_status, &dto.order_status);
        changed |= patch::apply(&mut self.order_date, &dto.order_date.map(Some));
        changed |= patch::apply(&mut self.required_date, &dto.required_date.map(Some));
        changed |= patch::apply(&mut self.shipped_date, &dto.shipped_date);
        changed |= patch::apply(&mut self.store_id, &dto.store_id);
        changed |= patch::apply(&mut self.staff_id, &dto.staff_id);
        changed
    }
}

impl AggregateRoot for Order {
    fn element_name() -> &'static str {
        "Order"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPatch {
    #[serde(default, deserialize_with = "double_option")]
    pub customer_id: Option<Option<i32>>,
    pub order_status: Option<OrderStatus>,
    pub order_date: Option<NaiveDate>,
    pub required_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "double_option")]
    pub shipped_date: Option<Option<NaiveDate>>,
    pub store_id: Option<i32>,
    pub staff_id: Option<i32>,
}

/// Order as listed by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub order_status_label: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        let order_status_label = order.order_status.label().to_string();
        Self {
            order,
            order_status_label,
        }
    }
}

/// Order with its lines and the order total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub header: OrderView,
    pub items: Vec<OrderItemView>,
    pub order_total: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderFilter {
    pub customer_id: Option<i32>,
    pub store_id: Option<i32>,
    pub staff_id: Option<i32>,
    pub order_status: Option<OrderStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_JSON: &str = r#"{"order_id": 2, "customer_id": 1, "order_status": 1,
        "order_date": "2024-06-08", "required_date": "2024-06-10",
        "store_id": 1, "staff_id": 1}"#;

    #[test]
    fn test_order_deserializes_iso_dates() {
        let order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        assert_eq!(order.order_date, NaiveDate::from_ymd_opt(2024, 6, 8));
        assert_eq!(order.shipped_date, None);
        assert_eq!(order.order_status, OrderStatus::Pending);
    }

    #[test]
    fn test_view_carries_label() {
        let order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        let json = serde_json::to_value(OrderView::from(order)).unwrap();
        assert_eq!(json["order_status"], 1);
        assert_eq!(json["order_status_label"], "Pending");
        assert_eq!(json["order_date"], "2024-06-08");
    }

    #[test]
    fn test_shipping_before_ordering_is_rejected() {
        let mut order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        order.shipped_date = NaiveDate::from_ymd_opt(2024, 6, 1);
        assert!(order.validate().is_err());
    }

    #[test]
    fn test_missing_dates_are_rejected() {
        let mut order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        order.order_date = None;
        assert!(order.validate().unwrap_err().contains("order_date"));

        let mut order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        order.required_date = None;
        assert!(order.validate().unwrap_err().contains("required_date"));
    }

    #[test]
    fn test_patch_repairs_undecodable_date() {
        let mut order: Order = serde_json::from_str(ORDER_JSON).unwrap();
        order.order_date = None;
        let dto: OrderPatch = serde_json::from_str(r#"{"order_date": "2024-06-07"}"#).unwrap();
        assert!(order.apply_patch(&dto));
        assert_eq!(order.order_date, NaiveDate::from_ymd_opt(2024, 6, 7));
        assert!(order.validate().is_ok());
    }
}
