use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Query string of the inventory report (`store_id` is validated by the handler)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryReportRequest {
    pub store_id: Option<String>,
}

/// One product line under a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub product_id: Option<i32>,
    pub product_name: String,
    pub quantity: i32,
}

/// Stock grouped by store name; store names are kept in sorted order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryReportResponse {
    pub report_title: String,
    pub data: BTreeMap<String, Vec<InventoryLine>>,
}
