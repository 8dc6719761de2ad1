use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a003_product::aggregate::{
    Product, ProductFilter, ProductPatch, ProductSortField, ProductView, SortOrder,
};
use contracts::domain::common::AggregateRoot;
use contracts::shared::response::{Created, MessageResponse};
use serde::Deserialize;

use crate::domain::a003_product::service;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::http;
use crate::shared::state::AppState;

/// Raw query string of the product list; parsed by `into_filter`
#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    pub brand_id: Option<String>,
    pub category_id: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
}

impl ProductListQuery {
    fn into_filter(self) -> ApiResult<ProductFilter> {
        let sort = match self.sort_by.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(field) => {
                let field = ProductSortField::parse(field).map_err(ApiError::BadRequest)?;
                Some((field, SortOrder::parse(self.order_by.as_deref())))
            }
            None => None,
        };

        Ok(ProductFilter {
            brand_id: http::query_int(self.brand_id.as_deref(), "brand_id")?,
            category_id: http::query_int(self.category_id.as_deref(), "category_id")?,
            min_price: http::query_decimal(self.min_price.as_deref(), "min_price")?,
            max_price: http::query_decimal(self.max_price.as_deref(), "max_price")?,
            sort,
        })
    }
}

/// GET /api/production/products/
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> ApiResult<Json<Vec<ProductView>>> {
    let filter = query.into_filter()?;
    Ok(Json(service::list(&state.db, &filter).await?))
}

/// GET /api/production/products/:product_id/
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ProductView>> {
    Ok(Json(service::get_by_id(&state.db, id).await?))
}

/// POST /api/production/products/
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Created<ProductView>>)> {
    let dto: Product = http::parse_create(&body, Product::REQUIRED_FIELDS)?;
    let item = service::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(Created::new(Product::element_name(), item)),
    ))
}

/// PATCH /api/production/products/:product_id/
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> ApiResult<Json<ProductView>> {
    let dto: ProductPatch = http::parse_patch(&body)?;
    Ok(Json(service::update(&state.db, id, dto).await?))
}

/// DELETE /api/production/products/:product_id/
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<MessageResponse>> {
    Ok(Json(service::delete(&state.db, id).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_only_applied_with_sort_by() {
        let filter = ProductListQuery {
            order_by: Some("desc".into()),
            ..Default::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.sort, None);

        let filter = ProductListQuery {
            sort_by: Some("list_price".into()),
            order_by: Some("desc".into()),
            ..Default::default()
        }
        .into_filter()
        .unwrap();
        assert_eq!(filter.sort, Some((ProductSortField::ListPrice, SortOrder::Desc)));
    }

    #[test]
    fn test_bad_parameters_are_rejected() {
        let err = ProductListQuery {
            sort_by: Some("price".into()),
            ..Default::default()
        }
        .into_filter()
        .unwrap_err();
        assert!(err.to_string().starts_with("Invalid sort field. Allowed:"));

        let err = ProductListQuery {
            min_price: Some("cheap".into()),
            ..Default::default()
        }
        .into_filter()
        .unwrap_err();
        assert_eq!(err.to_string(), "min_price must be a valid number.");
    }
}
