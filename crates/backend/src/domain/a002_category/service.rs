use super::repository;
use contracts::domain::a002_category::aggregate::{Category, CategoryPatch};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::MessageResponse;
use sea_orm::DatabaseConnection;

use crate::shared::error::{ApiError, ApiResult};

pub async fn list_all(db: &DatabaseConnection) -> ApiResult<Vec<Category>> {
    Ok(repository::list_all(db).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<Category> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(Category::not_found_message()))
}

pub async fn create(db: &DatabaseConnection, aggregate: Category) -> ApiResult<Category> {
    aggregate.validate().map_err(ApiError::BadRequest)?;

    if repository::exists(db, aggregate.category_id).await? {
        return Err(ApiError::conflict(Category::duplicate_message(
            "category_id",
            aggregate.category_id,
        )));
    }

    repository::insert(db, &aggregate).await?;
    tracing::info!(
        "Created category {} ({})",
        aggregate.category_id,
        aggregate.category_name
    );
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: CategoryPatch) -> ApiResult<Category> {
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
    tracing::info!("Deleted category {}", id);
    Ok(MessageResponse::new(Category::deleted_message(
        &aggregate.category_name,
        id,
    )))
}
