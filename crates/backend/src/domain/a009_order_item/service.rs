use super::repository;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a008_order::aggregate::Order;
use contracts::domain::a009_order_item::aggregate::{OrderItem, OrderItemKey, OrderItemPatch, OrderItemView};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::MessageResponse;
use sea_orm::DatabaseConnection;

use crate::domain::{a003_product, a008_order};
use crate::shared::error::{write_error, ApiError, ApiResult};

async fn attach_product_names(
    db: &DatabaseConnection,
    items: Vec<OrderItem>,
) -> ApiResult<Vec<OrderItemView>> {
    let mut product_ids: Vec<i32> = items.iter().map(|i| i.product_id).collect();
    product_ids.sort_unstable();
    product_ids.dedup();
    let names = a003_product::repository::names_by_ids(db, product_ids).await?;

    Ok(items
        .into_iter()
        .map(|item| {
            let name = names.get(&item.product_id).cloned();
            OrderItemView::new(item, name)
        })
        .collect())
}

async fn find(db: &DatabaseConnection, key: OrderItemKey) -> ApiResult<OrderItem> {
    repository::get_by_key(db, key)
        .await?
        .ok_or_else(|| ApiError::not_found(OrderItem::not_found_message()))
}

async fn ensure_product(db: &DatabaseConnection, product_id: i32) -> ApiResult<()> {
    if !a003_product::repository::exists(db, product_id).await? {
        return Err(ApiError::not_found(Product::missing_reference_message(
            product_id,
        )));
    }
    Ok(())
}

pub async fn list(db: &DatabaseConnection, order_id: Option<i32>) -> ApiResult<Vec<OrderItemView>> {
    let items = repository::list(db, order_id).await?;
    attach_product_names(db, items).await
}

pub async fn views_for_order(db: &DatabaseConnection, order_id: i32) -> ApiResult<Vec<OrderItemView>> {
    list(db, Some(order_id)).await
}

pub async fn get_by_key(db: &DatabaseConnection, key: OrderItemKey) -> ApiResult<OrderItemView> {
    let item = find(db, key).await?;
    let mut views = attach_product_names(db, vec![item]).await?;
    views
        .pop()
        .ok_or_else(|| ApiError::Internal("Order item view could not be built".into()))
}

pub async fn create(db: &DatabaseConnection, mut aggregate: OrderItem) -> ApiResult<OrderItemView> {
    aggregate.validate().map_err(ApiError::BadRequest)?;

    if !a008_order::repository::exists(db, aggregate.order_id).await? {
        return Err(ApiError::not_found(Order::missing_reference_message(
            aggregate.order_id,
        )));
    }
    ensure_product(db, aggregate.product_id).await?;

    let key = aggregate.key();
    if repository::get_by_key(db, key).await?.is_some() {
        return Err(ApiError::conflict(format!(
            "Order item {} already exists in order {}.",
            key.item_id, key.order_id
        )));
    }

    aggregate.before_write();
    repository::insert(db, &aggregate).await.map_err(write_error)?;
    tracing::info!("Created order item {}", key);
    get_by_key(db, key).await
}

pub async fn update(
    db: &DatabaseConnection,
    key: OrderItemKey,
    dto: OrderItemPatch,
) -> ApiResult<OrderItemView> {
    let mut aggregate = find(db, key).await?;
    if aggregate.apply_patch(&dto) {
        aggregate.validate().map_err(ApiError::BadRequest)?;
        ensure_product(db, aggregate.product_id).await?;
        aggregate.before_write();
        repository::update(db, &aggregate).await.map_err(write_error)?;
    }
    get_by_key(db, key).await
}

pub async fn delete(db: &DatabaseConnection, key: OrderItemKey) -> ApiResult<MessageResponse> {
    if !repository::delete(db, key).await? {
        return Err(ApiError::not_found(OrderItem::not_found_message()));
    }
    tracing::info!("Deleted order item {}", key);
    Ok(MessageResponse::new(format!(
        "Order item {} of order {} was deleted successfully.",
        key.item_id, key.order_id
    )))
}
