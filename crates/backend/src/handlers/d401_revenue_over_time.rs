use axum::extract::{Query, State};
use axum::Json;
use chrono::{Local, NaiveDate};
use contracts::dashboards::d401_revenue_over_time::{
    RevenueOverTimeRequest, RevenueOverTimeResponse, RevenueQueryParams,
};
use contracts::enums::report_period::ReportPeriod;

use crate::dashboards::d401_revenue_over_time::service::{self, RevenueQuery};
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::http;
use crate::shared::state::AppState;

/// Validate the raw query string. `end_date` falls back to `today`.
fn parse_request(request: RevenueOverTimeRequest, today: NaiveDate) -> ApiResult<RevenueQuery> {
    let period = match request.period.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
        Some(raw) => raw.parse::<ReportPeriod>().map_err(ApiError::BadRequest)?,
        None => ReportPeriod::default(),
    };
    let start_date = http::query_date(request.start_date.as_deref())?;
    let end_date = http::query_date(request.end_date.as_deref())?.unwrap_or(today);

    let echo = RevenueQueryParams {
        start_date: start_date.map(|d| d.format("%Y-%m-%d").to_string()),
        end_date: end_date.format("%Y-%m-%d").to_string(),
        period: period.as_str().to_string(),
    };

    Ok(RevenueQuery {
        start_date,
        end_date,
        period,
        echo,
    })
}

/// GET /api/report/revenue-over-time/?start_date=2016-01-01&end_date=2018-12-31&period=month
pub async fn get_revenue_over_time(
    State(state): State<AppState>,
    Query(request): Query<RevenueOverTimeRequest>,
) -> ApiResult<Json<RevenueOverTimeResponse>> {
    let query = parse_request(request, Local::now().date_naive())?;
    tracing::info!(
        "D401 Revenue: {:?}..{} by {}",
        query.start_date,
        query.end_date,
        query.period
    );

    match service::get_revenue_over_time(&state.db, query, &state.currency).await {
        Ok(response) => {
            tracing::info!("D401 Revenue: Returning {} buckets", response.data.len());
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D401 Revenue: Failed to build report: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
    }

    #[test]
    fn test_defaults() {
        let query = parse_request(RevenueOverTimeRequest::default(), today()).unwrap();
        assert_eq!(query.period, ReportPeriod::Month);
        assert_eq!(query.end_date, today());
        assert_eq!(query.echo.end_date, "2024-05-17");
        assert_eq!(query.echo.start_date, None);
        assert_eq!(query.echo.period, "month");
    }

    #[test]
    fn test_bad_period_and_date() {
        let err = parse_request(
            RevenueOverTimeRequest {
                period: Some("decade".into()),
                ..Default::default()
            },
            today(),
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Parameter 'period' must be one of: day, week, month, quarter, year."
        );

        let err = parse_request(
            RevenueOverTimeRequest {
                start_date: Some("2017/01/01".into()),
                ..Default::default()
            },
            today(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), http::INVALID_DATE);
    }
}
