use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a008_order::aggregate::{Order, OrderDetail, OrderFilter, OrderPatch, OrderView};
use contracts::domain::common::AggregateRoot;
use contracts::enums::order_status::OrderStatus;
use contracts::shared::response::{Created, MessageResponse};
use serde::Deserialize;

use crate::domain::a008_order::service;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::http;
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    pub customer_id: Option<String>,
    pub store_id: Option<String>,
    pub staff_id: Option<String>,
    pub order_status: Option<String>,
}

impl OrderListQuery {
    fn into_filter(self) -> ApiResult<OrderFilter> {
        let order_status = http::query_int(self.order_status.as_deref(), "order_status")?
            .map(|code| OrderStatus::try_from(i64::from(code)).map_err(ApiError::BadRequest))
            .transpose()?;

        Ok(OrderFilter {
            customer_id: http::query_int(self.customer_id.as_deref(), "customer_id")?,
            store_id: http::query_int(self.store_id.as_deref(), "store_id")?,
            staff_id: http::query_int(self.staff_id.as_deref(), "staff_id")?,
            order_status,
        })
    }
}

/// GET /api/sales/orders/
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> ApiResult<Json<Vec<OrderView>>> {
    let filter = query.into_filter()?;
    Ok(Json(service::list(&state.db, &filter).await?))
}

/// GET /api/sales/orders/:order_id/
///
/// Header plus the order lines and their total.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<OrderDetail>> {
    Ok(Json(service::get_detail(&state.db, id).await?))
}

/// POST /api/sales/orders/
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Created<OrderView>>)> {
    let dto: Order = http::parse_create(&body, Order::REQUIRED_FIELDS)?;
    let item = service::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new(Order::element_name(), item)),
    ))
}

/// PATCH /api/sales/orders/:order_id/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> ApiResult<Json<OrderView>> {
    let dto: OrderPatch = http::parse_patch(&body)?;
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/sales/orders/:order_id/
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    Ok(Json(service::delete(&state.db, id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_accepts_known_codes_only() {
        let filter = OrderListQuery {
            order_status: Some("4".into()),
            ..Default::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.order_status, Some(OrderStatus::Completed));

        let err = OrderListQuery {
            order_status: Some("9".into()),
            ..Default::default()
        }
        .into_filter()
        .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err = OrderListQuery {
            store_id: Some("main".into()),
            ..Default::default()
        }
        .into_filter()
        .unwrap_err();
        assert_eq!(err.to_string(), "store_id must be a valid integer.");
    }
}
