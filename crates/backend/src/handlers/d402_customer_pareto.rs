use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d402_customer_pareto::{
    CustomerParetoRequest, CustomerParetoResponse, ParetoQueryParams,
};

use crate::dashboards::d402_customer_pareto::service::{self, ParetoQuery, DEFAULT_THRESHOLD};
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::http;
use crate::shared::state::AppState;

fn parse_request(request: CustomerParetoRequest) -> ApiResult<ParetoQuery> {
    let threshold = match request.threshold.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(raw) => raw.parse::<f64>().map_err(|_| {
            ApiError::bad_request("Parameter 'threshold' must be a valid number.")
        })?,
        None => DEFAULT_THRESHOLD,
    };
    let threshold = service::validate_threshold(threshold)?;
    let start_date = http::query_date(request.start_date.as_deref())?;
    let end_date = http::query_date(request.end_date.as_deref())?;

    let echo = ParetoQueryParams {
        start_date: start_date.map(|d| d.format("%Y-%m-%d").to_string()),
        end_date: end_date.map(|d| d.format("%Y-%m-%d").to_string()),
        threshold,
    };

    Ok(ParetoQuery {
        start_date,
        end_date,
        threshold,
        echo,
    })
}

/// GET /api/report/customer-pareto/?start_date=2016-01-01&end_date=2018-12-31&threshold=80
pub async fn get_customer_pareto(
    State(state): State<AppState>,
    Query(request): Query<CustomerParetoRequest>,
) -> ApiResult<Json<CustomerParetoResponse>> {
    let query = parse_request(request)?;
    tracing::info!(
        "D402 Pareto: {:?}..{:?} threshold={}",
        query.start_date,
        query.end_date,
        query.threshold
    );

    match service::get_customer_pareto(&state.db, query, &state.currency).await {
        Ok(response) => {
            tracing::info!(
                "D402 Pareto: {} of {} customers are core",
                response.summary.core_customers,
                response.summary.total_customers
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D402 Pareto: Failed to build report: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_parsing() {
        let query = parse_request(CustomerParetoRequest::default()).unwrap();
        assert_eq!(query.threshold, 80.0);
        assert_eq!(query.echo.threshold, 80.0);

        let query = parse_request(CustomerParetoRequest {
            threshold: Some("65.5".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(query.threshold, 65.5);

        let err = parse_request(CustomerParetoRequest {
            threshold: Some("most".into()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Parameter 'threshold' must be a valid number.");

        assert!(parse_request(CustomerParetoRequest {
            threshold: Some("0".into()),
            ..Default::default()
        })
        .is_err());
    }
}
