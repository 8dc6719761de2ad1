use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a007_staff::aggregate::{Staff, StaffFilter, StaffPatch};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::{Created, MessageResponse};
use serde::Deserialize;

use crate::domain::a007_staff::service;
use crate::shared::error::ApiResult;
use crate::shared::http;
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct StaffListQuery {
    pub store_id: Option<String>,
    pub active: Option<String>,
}

/// GET /api/sales/staffs/
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<StaffListQuery>,
) -> ApiResult<Json<Vec<Staff>>> {
    let filter = StaffFilter {
        store_id: http::query_int(query.store_id.as_deref(), "store_id")?,
        active: http::query_bool(query.active.as_deref(), "active")?,
    };
    Ok(Json(service::list(&state.db, &filter).await?))
}

/// GET /api/sales/staffs/:staff_id/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Staff>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/sales/staffs/
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Created<Staff>>)> {
    let dto: Staff = http::parse_create(&body, Staff::REQUIRED_FIELDS)?;
    let item = service::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new(Staff::element_name(), item)),
    ))
}

/// PATCH /api/sales/staffs/:staff_id/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> ApiResult<Json<Staff>> {
    let dto: StaffPatch = http::parse_patch(&body)?;
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/sales/staffs/:staff_id/
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    Ok(Json(service::delete(&state.db, id).await?))
}
