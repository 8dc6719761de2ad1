use chrono::NaiveDate;
use contracts::dashboards::d402_customer_pareto::{
    CustomerParetoResponse, ParetoCustomer, ParetoQueryParams, ParetoSummary,
};
use contracts::shared::money::{self, PRICE_SCALE};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use super::repository::{self, CustomerRevenueRow};
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::percentile::percentile_rank;

pub const REPORT_TITLE: &str = "Customer Pareto analysis";
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Fractional digits of shares and ranks
const SHARE_SCALE: u32 = 4;

#[derive(Debug, Clone)]
pub struct ParetoQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Cumulative revenue share (percent) that delimits the core group
    pub threshold: f64,
    pub echo: ParetoQueryParams,
}

pub fn validate_threshold(threshold: f64) -> ApiResult<f64> {
    if threshold.is_finite() && threshold > 0.0 && threshold <= 100.0 {
        Ok(threshold)
    } else {
        Err(ApiError::bad_request(
            "Parameter 'threshold' must be greater than 0 and at most 100.",
        ))
    }
}

pub async fn get_customer_pareto(
    conn: &DatabaseConnection,
    query: ParetoQuery,
    currency: &str,
) -> ApiResult<CustomerParetoResponse> {
    if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
        if start > end {
            return Err(ApiError::bad_request(
                "start_date must not be after end_date.",
            ));
        }
    }
    let threshold = validate_threshold(query.threshold)?;

    let rows =
        repository::get_revenue_by_customer(conn, query.start_date, query.end_date).await?;
    let (summary, data) = analyze(rows, threshold);

    Ok(CustomerParetoResponse {
        report_title: REPORT_TITLE.to_string(),
        currency: currency.to_string(),
        query_params: query.echo,
        summary,
        data,
    })
}

fn share_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        Decimal::ZERO
    } else {
        part / whole * Decimal::ONE_HUNDRED
    }
}

fn to_share(value: Decimal) -> f64 {
    money::to_f64(money::with_scale(value, SHARE_SCALE))
}

/// Rank customers by revenue and mark the core group: a customer is core
/// while the cumulative share of the customers ranked above it is still
/// below `threshold`.
fn analyze(rows: Vec<CustomerRevenueRow>, threshold: f64) -> (ParetoSummary, Vec<ParetoCustomer>) {
    let mut customers: Vec<(i32, String, Decimal)> = rows
        .into_iter()
        .map(|r| {
            (
                r.customer_id,
                format!("{} {}", r.first_name, r.last_name),
                money::from_f64(r.total_revenue, PRICE_SCALE),
            )
        })
        .collect();
    customers.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));

    let total: Decimal = customers.iter().map(|c| c.2).sum();
    let mut ascending: Vec<Decimal> = customers.iter().map(|c| c.2).collect();
    ascending.sort();

    let mut cumulative = Decimal::ZERO;
    let mut data = Vec::with_capacity(customers.len());
    for (customer_id, customer_name, revenue) in customers {
        let share = share_of(revenue, total);
        let is_core = money::to_f64(cumulative) < threshold;
        cumulative += share;

        data.push(ParetoCustomer {
            customer_id,
            customer_name,
            total_revenue: revenue,
            revenue_share: to_share(share),
            cumulative_share: to_share(cumulative),
            percentile_rank: (percentile_rank(&ascending, revenue) * 10_000.0).round() / 10_000.0,
            is_core,
        });
    }

    let core_customers = data.iter().filter(|c| c.is_core).count();
    let core_customer_share = if data.is_empty() {
        0.0
    } else {
        to_share(share_of(
            Decimal::from(core_customers),
            Decimal::from(data.len()),
        ))
    };

    let summary = ParetoSummary {
        total_customers: data.len(),
        core_customers,
        core_customer_share,
        total_revenue: money::with_scale(total, PRICE_SCALE),
        threshold,
    };
    (summary, data)
}
