use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a001_brand::aggregate::{Brand, BrandPatch};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::{Created, MessageResponse};

use crate::domain::a001_brand::service;
use crate::shared::error::ApiResult;
use crate::shared::http;
use crate::shared::state::AppState;

/// GET /api/production/brands/
pub async fn list_all(State(state): State<AppState>) -> ApiResult<Json<Vec<Brand>>> {
    Ok(Json(service::list_all(&state.db).await?))
}

/// GET /api/production/brands/:brand_id/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Brand>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/production/brands/
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Created<Brand>>)> {
    let dto: Brand = http::parse_create(&body, Brand::REQUIRED_FIELDS)?;
    let item = service::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new(Brand::element_name(), item)),
    ))
}

/// PATCH /api/production/brands/:brand_id/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> ApiResult<Json<Brand>> {
    let dto: BrandPatch = http::parse_patch(&body)?;
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/production/brands/:brand_id/
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    Ok(Json(service::delete(&state.db, id).await?))
}
