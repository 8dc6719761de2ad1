use chrono::NaiveDate;
use contracts::dashboards::d401_revenue_over_time::{
    RevenueBucket, RevenueOverTimeResponse, RevenueQueryParams,
};
use contracts::enums::report_period::ReportPeriod;
use contracts::shared::money;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use super::repository::{self, RevenueRow};
use crate::shared::error::{ApiError, ApiResult};

pub const REPORT_TITLE: &str = "Revenue over time report";

/// Fractional digits of `total_revenue` in the response
const REVENUE_SCALE: u32 = 3;

/// Upper bound on generated buckets (about 27 years of days)
pub const MAX_BUCKETS: usize = 10_000;

/// Validated report parameters
#[derive(Debug, Clone)]
pub struct RevenueQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: NaiveDate,
    pub period: ReportPeriod,
    /// Parameters as given, echoed back in the response
    pub echo: RevenueQueryParams,
}

pub async fn get_revenue_over_time(
    conn: &DatabaseConnection,
    query: RevenueQuery,
    currency: &str,
) -> ApiResult<RevenueOverTimeResponse> {
    if let Some(start) = query.start_date {
        if start > query.end_date {
            return Err(ApiError::bad_request(
                "start_date must not be after end_date.",
            ));
        }
    }

    let rows =
        repository::get_revenue_by_period(conn, query.start_date, query.end_date, query.period)
            .await?;
    let data = fill_gaps(rows, query.start_date, query.end_date, query.period)?;

    Ok(RevenueOverTimeResponse {
        report_title: REPORT_TITLE.to_string(),
        currency: currency.to_string(),
        query_params: query.echo,
        data,
    })
}

/// Every bucket from the first one (start date's, else the earliest with
/// revenue) through the end date's, with zero where there were no sales.
fn fill_gaps(
    rows: Vec<RevenueRow>,
    start_date: Option<NaiveDate>,
    end_date: NaiveDate,
    period: ReportPeriod,
) -> ApiResult<Vec<RevenueBucket>> {
    let mut revenue: HashMap<NaiveDate, Decimal> = HashMap::with_capacity(rows.len());
    for row in rows {
        match NaiveDate::parse_from_str(&row.period, "%Y-%m-%d") {
            Ok(bucket) => {
                revenue.insert(bucket, money::from_f64(row.total_revenue, REVENUE_SCALE));
            }
            Err(_) => tracing::warn!("Skipping revenue bucket with bad period '{}'", row.period),
        }
    }

    let first = match start_date {
        Some(start) => period.bucket_start(start),
        None => match revenue.keys().min() {
            Some(earliest) => *earliest,
            None => return Ok(Vec::new()),
        },
    };
    let last = period.bucket_start(end_date);

    let mut data = Vec::new();
    let mut current = first;
    while current <= last {
        if data.len() >= MAX_BUCKETS {
            return Err(ApiError::bad_request(format!(
                "The requested range spans more than {} {} periods. Narrow the dates or use a longer period.",
                MAX_BUCKETS, period
            )));
        }
        let total = revenue.get(&current).copied().unwrap_or(Decimal::ZERO);
        data.push(RevenueBucket {
            period: current.format("%Y-%m-%d").to_string(),
            total_revenue: money::with_scale(total, REVENUE_SCALE).to_string(),
        });

        let next = period.next_bucket(current);
        if next <= current {
            break;
        }
        current = next;
    }

    Ok(data)
}
