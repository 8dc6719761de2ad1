use contracts::domain::a003_product::aggregate::{Product, ProductFilter, ProductSortField, SortOrder};
use contracts::shared::money::{self, PRICE_SCALE};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, Order, QueryFilter, QueryOrder, Set};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,
    pub product_name: String,
    pub brand_id: i32,
    pub category_id: i32,
    pub model_year: i16,
    pub list_price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            product_id: m.product_id,
            product_name: m.product_name,
            brand_id: m.brand_id,
            category_id: m.category_id,
            model_year: m.model_year,
            list_price: money::from_f64(m.list_price, PRICE_SCALE),
        }
    }
}

fn to_active(aggregate: &Product) -> ActiveModel {
    ActiveModel {
        product_id: Set(aggregate.product_id),
        product_name: Set(aggregate.product_name.clone()),
        brand_id: Set(aggregate.brand_id),
        category_id: Set(aggregate.category_id),
        model_year: Set(aggregate.model_year),
        list_price: Set(money::to_f64(aggregate.list_price)),
    }
}

fn sort_column(field: ProductSortField) -> Column {
    match field {
        ProductSortField::ProductName => Column::ProductName,
        ProductSortField::ListPrice => Column::ListPrice,
        ProductSortField::ModelYear => Column::ModelYear,
    }
}

/// Products matching `filter`; price bounds are inclusive.
/// Ties (and the unsorted case) are ordered by `product_id`.
pub async fn list(conn: &DatabaseConnection, filter: &ProductFilter) -> anyhow::Result<Vec<Product>> {
    let mut query = Entity::find();

    if let Some(brand_id) = filter.brand_id {
        query = query.filter(Column::BrandId.eq(brand_id));
    }
    if let Some(category_id) = filter.category_id {
        query = query.filter(Column::CategoryId.eq(category_id));
    }
    if let Some(min_price) = filter.min_price {
        query = query.filter(Column::ListPrice.gte(money::to_f64(min_price)));
    }
    if let Some(max_price) = filter.max_price {
        query = query.filter(Column::ListPrice.lte(money::to_f64(max_price)));
    }

    if let Some((field, order)) = filter.sort {
        let direction = match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };
        query = query.order_by(sort_column(field), direction);
    }
    query = query.order_by_asc(Column::ProductId);

    let items = query.all(conn).await?.into_iter().map(Into::into).collect();
    Ok(items)
}

pub async fn get_by_id(conn: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Product>> {
    let result = Entity::find_by_id(id).one(conn).await?;
    Ok(result.map(Into::into))
}

pub async fn exists(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    Ok(Entity::find_by_id(id).count(conn).await? > 0)
}

pub async fn names_by_ids(
    conn: &DatabaseConnection,
    ids: Vec<i32>,
) -> anyhow::Result<HashMap<i32, String>> {
    let rows = Entity::find()
        .filter(Column::ProductId.is_in(ids))
        .all(conn)
        .await?;
    Ok(rows
        .into_iter()
        .map(|m| (m.product_id, m.product_name))
        .collect())
}

pub async fn insert(conn: &DatabaseConnection, aggregate: &Product) -> anyhow::Result<()> {
    Entity::insert(to_active(aggregate)).exec(conn).await?;
    Ok(())
}

pub async fn update(conn: &DatabaseConnection, aggregate: &Product) -> anyhow::Result<()> {
    to_active(aggregate).update(conn).await?;
    Ok(())
}

pub async fn delete(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}
