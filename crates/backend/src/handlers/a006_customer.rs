use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a006_customer::aggregate::{Customer, CustomerFilter, CustomerPatch};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::{Created, MessageResponse};
use serde::Deserialize;

use crate::domain::a006_customer::service;
use crate::shared::error::ApiResult;
use crate::shared::http;
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CustomerListQuery {
    pub city: Option<String>,
    pub state: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// GET /api/sales/customer/
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CustomerListQuery>,
) -> ApiResult<Json<Vec<Customer>>> {
    let filter = CustomerFilter {
        city: non_empty(query.city),
        state: non_empty(query.state),
    };
    Ok(Json(service::list(&state.db, &filter).await?))
}

/// GET /api/sales/customer/:customer_id/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Customer>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/sales/customer/ (also /api/sales/customer/create/)
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Created<Customer>>)> {
    let dto: Customer = http::parse_create(&body, Customer::REQUIRED_FIELDS)?;
    let item = service::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new(Customer::element_name(), item)),
    ))
}

/// PATCH /api/sales/customer/:customer_id/ (also /api/sales/customer/update/:customer_id/)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> ApiResult<Json<Customer>> {
    let dto: CustomerPatch = http::parse_patch(&body)?;
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/sales/customer/:customer_id/ (also /api/sales/customer/delete/:customer_id/)
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    Ok(Json(service::delete(&state.db, id).await?))
}
