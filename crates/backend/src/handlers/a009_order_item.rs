use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a009_order_item::aggregate::{
    OrderItem, OrderItemKey, OrderItemPatch, OrderItemView,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::{Created, MessageResponse};
use serde::Deserialize;

use crate::domain::a009_order_item::service;
use crate::shared::error::ApiResult;
use crate::shared::http;
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct OrderItemListQuery {
    pub order_id: Option<String>,
}

/// GET /api/sales/order-items/
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<OrderItemListQuery>,
) -> ApiResult<Json<Vec<OrderItemView>>> {
    let order_id = http::query_int(query.order_id.as_deref(), "order_id")?;
    Ok(Json(service::list(&state.db, order_id).await?))
}

/// GET /api/sales/order-items/:order_id/:item_id/
pub async fn get_by_key(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(i32, i32)>,
) -> ApiResult<Json<OrderItemView>> {
    let key = OrderItemKey { order_id, item_id };
    Ok(Json(service::get_by_key(&state.db, key).await?))
}

/// POST /api/sales/order-items/
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Created<OrderItemView>>)> {
    let dto: OrderItem = http::parse_create(&body, OrderItem::REQUIRED_FIELDS)?;
    let item = service::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new(OrderItem::element_name(), item)),
    ))
}

/// PATCH /api/sales/order-items/:order_id/:item_id/
pub async fn update(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(i32, i32)>,
    body: Bytes,
) -> ApiResult<Json<OrderItemView>> {
    let key = OrderItemKey { order_id, item_id };
    let dto: OrderItemPatch = http::parse_patch(&body)?;
    Ok(Json(service::update(&state.db, key, dto).await?))
}

/// DELETE /api/sales/order-items/:order_id/:item_id/
pub async fn delete(
    State(state): State<AppState>,
    Path((order_id, item_id)): Path<(i32, i32)>,
) -> ApiResult<Json<MessageResponse>> {
    let key = OrderItemKey { order_id, item_id };
    Ok(Json(service::delete(&state.db, key).await?))
}
