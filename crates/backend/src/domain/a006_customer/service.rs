use super::repository;
use contracts::domain::a006_customer::aggregate::{Customer, CustomerFilter, CustomerPatch};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::MessageResponse;
use sea_orm::DatabaseConnection;

use crate::shared::error::{ApiError, ApiResult};

pub async fn list(db: &DatabaseConnection, filter: &CustomerFilter) -> ApiResult<Vec<Customer>> {
    Ok(repository::list(db, filter).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<Customer> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(Customer::not_found_message()))
}

pub async fn create(db: &DatabaseConnection, aggregate: Customer) -> ApiResult<Customer> {
    aggregate.validate().map_err(ApiError::BadRequest)?;

    if repository::exists(db, aggregate.customer_id).await? {
        return Err(ApiError::conflict(Customer::duplicate_message(
            "customer_id",
            aggregate.customer_id,
        )));
    }

    repository::insert(db, &aggregate).await?;
    tracing::info!("Created customer {}", aggregate.customer_id);
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: CustomerPatch) -> ApiResult<Customer> {
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
    tracing::info!("Deleted customer {}", id);
    Ok(MessageResponse::new(Customer::deleted_message(
        &aggregate.full_name(),
        id,
    )))
}
