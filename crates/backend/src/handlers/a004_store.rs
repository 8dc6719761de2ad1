use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a004_store::aggregate::{Store, StorePatch};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::{Created, MessageResponse};

use crate::domain::a004_store::service;
use crate::shared::error::ApiResult;
use crate::shared::http;
use crate::shared::state::AppState;

/// GET /api/sales/stores/
pub async fn list_all(State(state): State<AppState>) -> ApiResult<Json<Vec<Store>>> {
    Ok(Json(service::list_all(&state.db).await?))
}

/// GET /api/sales/stores/:store_id/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Store>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/sales/stores/
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Created<Store>>)> {
    let dto: Store = http::parse_create(&body, Store::REQUIRED_FIELDS)?;
    let item = service::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new(Store::element_name(), item)),
    ))
}

/// PATCH /api/sales/stores/:store_id/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> ApiResult<Json<Store>> {
    let dto: StorePatch = http::parse_patch(&body)?;
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/sales/stores/:store_id/
///
/// Staff, orders and stock of the store go with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    Ok(Json(service::delete(&state.db, id).await?))
}
