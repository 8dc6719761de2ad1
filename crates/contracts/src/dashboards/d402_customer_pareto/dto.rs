use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw query string; parsed and validated by the handler
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerParetoRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub threshold: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoQueryParams {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub threshold: f64,
}

/// Revenue position of one customer.
///
/// Shares and ranks are percentages in 0..=100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoCustomer {
    pub customer_id: i32,
    pub customer_name: String,
    pub total_revenue: Decimal,
    pub revenue_share: f64,
    pub cumulative_share: f64,
    pub percentile_rank: f64,
    /// Part of the head of customers producing `threshold` percent of revenue
    pub is_core: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParetoSummary {
    pub total_customers: usize,
    pub core_customers: usize,
    /// Percentage of customers in the core group
    pub core_customer_share: f64,
    pub total_revenue: Decimal,
    pub threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerParetoResponse {
    pub report_title: String,
    pub currency: String,
    pub query_params: ParetoQueryParams,
    pub summary: ParetoSummary,
    pub data: Vec<ParetoCustomer>,
}
