use serde::{Deserialize, Serialize};

/// Raw query string; parsed and validated by the handler
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevenueOverTimeRequest {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub period: Option<String>,
}

/// Parameters echoed back in the response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueQueryParams {
    pub start_date: Option<String>,
    pub end_date: String,
    pub period: String,
}

/// One time bucket. `period` is the first day of the bucket (YYYY-MM-DD),
/// `total_revenue` a decimal string with three fractional digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueBucket {
    pub period: String,
    pub total_revenue: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueOverTimeResponse {
    pub report_title: String,
    pub currency: String,
    pub query_params: RevenueQueryParams,
    pub data: Vec<RevenueBucket>,
}
