use super::repository;
use contracts::domain::a004_store::aggregate::{Store, StorePatch};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::MessageResponse;
use sea_orm::DatabaseConnection;

use crate::shared::error::{ApiError, ApiResult};

pub async fn list_all(db: &DatabaseConnection) -> ApiResult<Vec<Store>> {
    Ok(repository::list_all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<Store> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(Store::not_found_message()))
}

pub async fn create(db: &DatabaseConnection, aggregate: Store) -> ApiResult<Store> {
    aggregate.validate().map_err(ApiError::BadRequest)?;

    if repository::exists(db, aggregate.store_id).await? {
        return Err(ApiError::conflict(Store::duplicate_message(
            "store_id",
            aggregate.store_id,
        )));
    }

    repository::insert(db, &aggregate).await?;
    tracing::info!("Created store {} ({})", aggregate.store_id, aggregate.store_name);
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: StorePatch) -> ApiResult<Store> {
    let mut aggregate = get_by_id(db, id).await?;
    if aggregate.apply_patch(&dto) {
        aggregate.validate().map_err(ApiError::BadRequest)?;
        repository::update(db, &aggregate).await?;
    }
    Ok(aggregate)
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> ApiResult<MessageResponse> {
    let aggregate = get_by_id(db, id).await?;
    repository::delete(db, id).await?;
    tracing::info!("Deleted store {} and its dependent rows", id);
    Ok(MessageResponse::new(Store::deleted_message(
        &aggregate.store_name,
        id,
    )))
}
