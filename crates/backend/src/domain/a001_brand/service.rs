use super::repository;
use contracts::domain::a001_brand::aggregate::{Brand, BrandPatch};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::MessageResponse;
use sea_orm::DatabaseConnection;

use crate::shared::error::{ApiError, ApiResult};

pub async fn list_all(db: &DatabaseConnection) -> ApiResult<Vec<Brand>> {
    Ok(repository::list_all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<Brand> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(Brand::not_found_message()))
}

pub async fn create(db: &DatabaseConnection, aggregate: Brand) -> ApiResult<Brand> {
    aggregate.validate().map_err(ApiError::BadRequest)?;

    if repository::exists(db, aggregate.brand_id).await? {
        return Err(ApiError::conflict(Brand::duplicate_message(
            "brand_id",
            aggregate.brand_id,
        )));
    }

    repository::insert(db, &aggregate).await?;
    tracing::info!("Created brand {} ({})", aggregate.brand_id, aggregate.brand_name);
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: BrandPatch) -> ApiResult<Brand> {
    let mut aggregate = get_by_id(db, id).await?;
    if !aggregate.apply_patch(&dto) {
        return Ok(aggregate);
    }

    aggregate.validate().map_err(ApiError::BadRequest)?;
    repository::update(db, &aggregate).await?;
    Ok(aggregate)
}

/// Removes the brand together with its products (cascade).
pub async fn delete(db: &DatabaseConnection, id: i32) -> ApiResult<MessageResponse> {
    let aggregate = get_by_id(db, id).await?;
    repository::delete(db, id).await?;
    tracing::info!("Deleted brand {}", id);
    Ok(MessageResponse::new(Brand::deleted_message(
        &aggregate.brand_name,
        id,
    )))
}
