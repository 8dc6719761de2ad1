use super::repository;
use contracts::domain::a001_brand::aggregate::Brand;
use contracts::domain::a002_category::aggregate::Category;
use contracts::domain::a003_product::aggregate::{Product, ProductFilter, ProductPatch, ProductView};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::MessageResponse;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::domain::{a001_brand, a002_category};
use crate::shared::error::{write_error, ApiError, ApiResult};

fn to_view(
    p: Product,
    brands: &HashMap<i32, String>,
    categories: &HashMap<i32, String>,
) -> ProductView {
    ProductView {
        brand_name: brands.get(&p.brand_id).cloned().unwrap_or_default(),
        category_name: categories.get(&p.category_id).cloned().unwrap_or_default(),
        product_id: p.product_id,
        product_name: p.product_name,
        brand_id: p.brand_id,
        category_id: p.category_id,
        model_year: p.model_year,
        list_price: p.list_price,
    }
}

/// Attach brand and category names to the products.
async fn to_views(db: &DatabaseConnection, products: Vec<Product>) -> ApiResult<Vec<ProductView>> {
    let mut brand_ids: Vec<i32> = products.iter().map(|p| p.brand_id).collect();
    brand_ids.sort_unstable();
    brand_ids.dedup();
    let mut category_ids: Vec<i32> = products.iter().map(|p| p.category_id).collect();
    category_ids.sort_unstable();
    category_ids.dedup();

    let brands = a001_brand::repository::names_by_ids(db, brand_ids).await?;
    let categories = a002_category::repository::names_by_ids(db, category_ids).await?;

    Ok(products
        .into_iter()
        .map(|p| to_view(p, &brands, &categories))
        .collect())
}

async fn to_single_view(db: &DatabaseConnection, product: Product) -> ApiResult<ProductView> {
    let mut views = to_views(db, vec![product]).await?;
    views
        .pop()
        .ok_or_else(|| ApiError::Internal("Product view could not be built".into()))
}

async fn ensure_references(db: &DatabaseConnection, product: &Product) -> ApiResult<()> {
    if !a001_brand::repository::exists(db, product.brand_id).await? {
        return Err(ApiError::not_found(Brand::missing_reference_message(
            product.brand_id,
        )));
    }
    if !a002_category::repository::exists(db, product.category_id).await? {
        return Err(ApiError::not_found(Category::missing_reference_message(
            product.category_id,
        )));
    }
    Ok(())
}

pub async fn list(db: &DatabaseConnection, filter: &ProductFilter) -> ApiResult<Vec<ProductView>> {
    let products = repository::list(db, filter).await?;
    to_views(db, products).await
}

async fn find(db: &DatabaseConnection, id: i32) -> ApiResult<Product> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| ApiError::not_found(Product::not_found_message()))
}

pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> ApiResult<ProductView> {
    let product = find(db, id).await?;
    to_single_view(db, product).await
}

pub async fn create(db: &DatabaseConnection, mut aggregate: Product) -> ApiResult<ProductView> {
    aggregate.validate().map_err(ApiError::BadRequest)?;
    ensure_references(db, &aggregate).await?;

    if repository::exists(db, aggregate.product_id).await? {
        return Err(ApiError::conflict(Product::duplicate_message(
            "product_id",
            aggregate.product_id,
        )));
    }

    aggregate.before_write();
    repository::insert(db, &aggregate).await.map_err(write_error)?;
    tracing::info!(
        "Created product {} ({})",
        aggregate.product_id,
        aggregate.product_name
    );
    to_single_view(db, aggregate).await
}

pub async fn update(db: &DatabaseConnection, id: i32, dto: ProductPatch) -> ApiResult<ProductView> {
    let mut aggregate = find(db, id).await?;

    if aggregate.apply_patch(&dto) {
        aggregate.validate().map_err(ApiError::BadRequest)?;
        ensure_references(db, &aggregate).await?;
        aggregate.before_write();
        repository::update(db, &aggregate).await.map_err(write_error)?;
    }

    to_single_view(db, aggregate).await
}

pub async fn delete(db: &DatabaseConnection, id: i32) -> ApiResult<MessageResponse> {
    let aggregate = find(db, id).await?;
    repository::delete(db, id).await?;
    tracing::info!("Deleted product {}", id);
    Ok(MessageResponse::new(Product::deleted_message(
        &aggregate.product_name,
        id,
    )))
}
