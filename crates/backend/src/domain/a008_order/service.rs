use super::repository;
use contracts::domain::a004_store::aggregate::Store;
use contracts::domain::a006_customer::aggregate::Customer;
use contracts::domain::a007_staff::aggregate::Staff;
use contracts::domain::a008_order::aggregate::{Order, OrderDetail, OrderFilter, OrderPatch, OrderView};
use contracts::domain::common::AggregateRoot;
use contracts::shared::money::{self, PRICE_SCALE};
use contracts::shared::response::MessageResponse;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::domain::{a004_store, a006_customer, a007_staff, a009_order_item};
use crate::shared::error::{write_error, ApiError, ApiResult};

async fn ensure_references(db: &DatabaseConnection, order: &Order) -> ApiResult<()> {
    if let Some(customer_id) = order.customer_id {
        if !a006_customer::repository::exists(db, customer_id).await? {
            return Err(ApiError::not_found(Customer::missing_reference_message(
                customer_id,
            )));
        }
    }
    if !a004_store::repository::exists(db, order.store_id).await? {
        return Err(ApiError::not_found(Store::missing_reference_message(
            order.store_id,
        )));
    }
    if !a007_staff::repository::exists(db, order.staff_id).await? {
        return Err(ApiError::not_found(Staff::missing_reference_message(
            order.staff_id,
        )));
    }
    Ok(())
}

async fn find(db: &DatabaseConnection, id: i32) -> ApiResult<Order> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(Order::not_found_message()))
}

pub async fn list(db: &DatabaseConnection, filter: &OrderFilter) -> ApiResult<Vec<OrderView>> {
    let orders = repository::list(db, filter).await?;
    Ok(orders.into_iter().map(OrderView::from).collect())
}

/// Order header with its lines and the order total
pub async fn get_detail(db: &DatabaseConnection, id: i32) -> ApiResult<OrderDetail> {
    let order = find(db, id).await?;
    let items = a009_order_item::service::views_for_order(db, id).await?;
    let total: Decimal = items.iter().map(|i| i.line_total).sum();

    Ok(OrderDetail {
        header: OrderView::from(order),
        items,
        order_total: money::with_scale(total, PRICE_SCALE),
    })
}

pub async fn create(db: &DatabaseConnection, aggregate: Order) -> ApiResult<OrderView> {
    aggregate.validate().map_err(ApiError::BadRequest)?;
    ensure_references(db, &aggregate).await?;

    if repository::exists(db, aggregate.order_id).await? {
        return Err(ApiError::conflict(Order::duplicate_message(
            "order_id",
            aggregate.order_id,
        )));
    }

    repository::insert(db, &aggregate).await.map_err(write_error)?;
    tracing::info!(
        "Created order {} ({}, store {})",
        aggregate.order_id,
        aggregate.order_status,
        aggregate.store_id
    );
    Ok(OrderView::from(aggregate))
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: OrderPatch) -> ApiResult<OrderView> {
    let mut aggregate = find(db, id).await?;
    if aggregate.apply_patch(&dto) {
        aggregate.validate().map_err(ApiError::BadRequest)?;
        ensure_references(db, &aggregate).await?;
        repository::update(db, &aggregate).await.map_err(write_error)?;
    }
    Ok(OrderView::from(aggregate))
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> ApiResult<MessageResponse> {
    find(db, id).await?;
    repository::delete(db, id).await?;
    tracing::info!("Deleted order {} and its items", id);
    Ok(MessageResponse::new(format!(
        "Order (ID: {}) was deleted successfully.",
        id
    )))
}
