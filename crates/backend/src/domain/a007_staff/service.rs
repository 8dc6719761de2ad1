use super::repository;
use contracts::domain::a004_store::aggregate::Store;
use contracts::domain::a007_staff::aggregate::{Staff, StaffFilter, StaffPatch};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::MessageResponse;
use sea_orm::DatabaseConnection;

use crate::domain::{a004_store, a008_order};
use crate::shared::error::{write_error, ApiError, ApiResult};

async fn ensure_references(db: &DatabaseConnection, staff: &Staff) -> ApiResult<()> {
    if !a004_store::repository::exists(db, staff.store_id).await? {
        return Err(ApiError::not_found(Store::missing_reference_message(
            staff.store_id,
        )));
    }
    if let Some(manager_id) = staff.manager_id {
        if !repository::exists(db, manager_id).await? {
            return Err(ApiError::not_found(format!(
                "Manager with ID '{}' does not exist.",
                manager_id
            )));
        }
    }
    Ok(())
}

async fn ensure_unique_email(
    db: &DatabaseConnection,
    staff: &Staff,
    except_id: Option<i32>,
) -> ApiResult<()> {
    if repository::email_taken(db, &staff.email, except_id).await? {
        return Err(ApiError::conflict(Staff::duplicate_message(
            "email",
            &staff.email,
        )));
    }
    Ok(())
}

pub async fn list(db: &DatabaseConnection, filter: &StaffFilter) -> ApiResult<Vec<Staff>> {
    Ok(repository::list(db, filter).await?)
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<Staff> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(Staff::not_found_message()))
}

pub async fn create(db: &DatabaseConnection, aggregate: Staff) -> ApiResult<Staff> {
    aggregate.validate().map_err(ApiError::BadRequest)?;
    ensure_references(db, &aggregate).await?;

    if repository::exists(db, aggregate.staff_id).await? {
        return Err(ApiError::conflict(Staff::duplicate_message(
            "staff_id",
            aggregate.staff_id,
        )));
    }
    ensure_unique_email(db, &aggregate, None).await?;

    repository::insert(db, &aggregate).await.map_err(write_error)?;
    tracing::info!("Created staff member {}", aggregate.staff_id);
    Ok(aggregate)
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: StaffPatch) -> ApiResult<Staff> {
    let mut aggregate = get_by_id(db, id).await?;
    if aggregate.apply_patch(&dto) {
        aggregate.validate().map_err(ApiError::BadRequest)?;
        ensure_references(db, &aggregate).await?;
        ensure_unique_email(db, &aggregate, Some(id)).await?;
        repository::update(db, &aggregate).await.map_err(write_error)?;
    }
    Ok(aggregate)
}

/// Refused while orders still name this staff member.
pub async fn delete(db: &DatabaseConnection, id: i32) -> ApiResult<MessageResponse> {
    let aggregate = get_by_id(db, id).await?;

    let orders = a008_order::repository::count_by_staff(db, id).await?;
    if orders > 0 {
        return Err(ApiError::conflict(format!(
            "Staff member {} is referenced by {} order(s) and cannot be deleted.",
            id, orders
        )));
    }

    repository::delete(db, id).await?;
    tracing::info!("Deleted staff member {}", id);
    Ok(MessageResponse::new(Staff::deleted_message(
        &format!("{} {}", aggregate.first_name, aggregate.last_name),
        id,
    )))
}
