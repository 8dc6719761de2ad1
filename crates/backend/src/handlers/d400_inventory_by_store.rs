use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d400_inventory_by_store::{InventoryReportRequest, InventoryReportResponse};

use crate::dashboards::d400_inventory_by_store::service;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::http;
use crate::shared::state::AppState;

/// GET /api/report/inventory-by-store/?store_id=1
pub async fn get_inventory_report(
    State(state): State<AppState>,
    Query(request): Query<InventoryReportRequest>,
) -> ApiResult<Json<InventoryReportResponse>> {
    let store_id = http::query_int(request.store_id.as_deref(), "store_id")?;
    tracing::info!("D400 Inventory: store_id={:?}", store_id);

    match service::get_inventory_report(&state.db, store_id).await {
        Ok(response) => {
            tracing::info!("D400 Inventory: Returning {} stores", response.data.len());
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D400 Inventory: Failed to build report: {}", e);
            Err(ApiError::from(e))
        }
    }
}
