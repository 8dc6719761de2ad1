use super::repository;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_store::aggregate::Store;
use contracts::domain::a005_stock::aggregate::{Stock, StockKey, StockPatch, StockView};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::MessageResponse;
use sea_orm::DatabaseConnection;

use crate::domain::{a003_product, a004_store};
use crate::shared::error::{write_error, ApiError, ApiResult};

pub const DUPLICATE_STOCK: &str =
    "A stock record for this product at this store already exists. Use PATCH to update it.";
pub const NO_CHANGES: &str = "No changes were made.";

/// Result of a quantity update
#[derive(Debug, Clone, PartialEq)]
pub enum StockUpdate {
    Updated(Stock),
    Unchanged,
}

pub async fn list(
    db: &DatabaseConnection,
    store_id: Option<i32>,
    product_id: Option<i32>,
) -> ApiResult<Vec<StockView>> {
    Ok(repository::list_views(db, store_id, product_id).await?)
}

pub async fn get_by_key(db: &DatabaseConnection, key: StockKey) -> ApiResult<StockView> {
    repository::get_view(db, key)
        .await?
        .ok_or_else(|| ApiError::not_found(Stock::not_found_message()))
}

pub async fn create(db: &DatabaseConnection, aggregate: Stock) -> ApiResult<Stock> {
    if !a004_store::repository::exists(db, aggregate.store_id).await? {
        return Err(ApiError::not_found(Store::missing_reference_message(
            aggregate.store_id,
        )));
    }
    if !a003_product::repository::exists(db, aggregate.product_id).await? {
        return Err(ApiError::not_found(Product::missing_reference_message(
            aggregate.product_id,
        )));
    }
    if repository::get_by_key(db, aggregate.key()).await?.is_some() {
        return Err(ApiError::conflict(DUPLICATE_STOCK));
    }

    aggregate.validate().map_err(ApiError::BadRequest)?;
    repository::insert(db, &aggregate).await.map_err(write_error)?;
    tracing::info!("Created stock record {} (qty {})", aggregate.key(), aggregate.quantity);
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, key: StockKey, dto: StockPatch) -> ApiResult<StockUpdate> {
    let mut aggregate = repository::get_by_key(db, key)
        .await?
        .ok_or_else(|| ApiError::not_found(Stock::not_found_message()))?;

    let quantity = dto
        .quantity
        .ok_or_else(|| ApiError::bad_request("Missing required field: quantity"))?;

    if aggregate.quantity == quantity {
        return Ok(StockUpdate::Unchanged);
    }

    aggregate.quantity = quantity;
    aggregate.validate().map_err(ApiError::BadRequest)?;
    repository::update(db, &aggregate).await.map_err(write_error)?;
    Ok(StockUpdate::Updated(aggregate))
}

pub async fn delete(db: &DatabaseConnection, key: StockKey) -> ApiResult<MessageResponse> {
    if !repository::delete(db, key).await? {
        return Err(ApiError::not_found(Stock::not_found_message()));
    }
    tracing::info!("Deleted stock record {}", key);
    Ok(MessageResponse::new(format!(
        "Stock record for product ID {} at store ID {} was deleted successfully.",
        key.product_id, key.store_id
    )))
}
