use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::a005_stock::aggregate::{Stock, StockKey, StockPatch, StockView};
use contracts::shared::response::MessageResponse;
use serde::Deserialize;

use crate::domain::a005_stock::service::{self, StockUpdate, NO_CHANGES};
use crate::shared::error::ApiResult;
use crate::shared::http;
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct StockListQuery {
    pub store_id: Option<String>,
    pub product_id: Option<String>,
}

/// GET /api/production/stocks/
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<StockListQuery>,
) -> ApiResult<Json<Vec<StockView>>> {
    let store_id = http::query_int(query.store_id.as_deref(), "store_id")?;
    let product_id = http::query_int(query.product_id.as_deref(), "product_id")?;
    Ok(Json(service::list(&state.db, store_id, product_id).await?))
}

/// GET /api/production/stocks/:store_id/:product_id/
pub async fn get_by_key(
    State(state): State<AppState>,
    Path((store_id, product_id)): Path<(i32, i32)>,
) -> ApiResult<Json<StockView>> {
    let key = StockKey {
        store_id,
        product_id,
    };
    Ok(Json(service::get_by_key(&state.db, key).await?))
}

/// POST /api/production/stocks/
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Stock>)> {
    let dto: Stock = http::parse_create(&body, Stock::REQUIRED_FIELDS)?;
    let stock = service::create(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(stock)))
}

/// PATCH /api/production/stocks/:store_id/:product_id/
///
/// Answers with the stock row, or with a message when the quantity was
/// already the requested one.
pub async fn update(
    State(state): State<AppState>,
    Path((store_id, product_id)): Path<(i32, i32)>,
    body: Bytes,
) -> ApiResult<Response> {
    let key = StockKey {
        store_id,
        product_id,
    };
    let dto: StockPatch = http::parse_patch(&body)?;
    let response = match service::update(&state.db, key, dto).await? {
        StockUpdate::Updated(stock) => Json(stock).into_response(),
        StockUpdate::Unchanged => Json(MessageResponse::new(NO_CHANGES)).into_response(),
    };
    Ok(response)
}

/// DELETE /api/production/stocks/:store_id/:product_id/
pub async fn delete(
    State(state): State<AppState>,
    Path((store_id, product_id)): Path<(i32, i32)>,
) -> ApiResult<Json<MessageResponse>> {
    let key = StockKey {
        store_id,
        product_id,
    };
    Ok(Json(service::delete(&state.db, key).await?))
}
