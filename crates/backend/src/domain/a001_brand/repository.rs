use contracts::domain::a001_brand::aggregate::Brand;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, Set};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "brands")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub brand_id: i32,
    pub brand_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Brand {
    fn from(m: Model) -> Self {
        Brand {
            brand_id: m.brand_id,
            brand_name: m.brand_name,
        }
    }
}

fn to_active(aggregate: &Brand) -> ActiveModel {
    ActiveModel {
        brand_id: Set(aggregate.brand_id),
        brand_name: Set(aggregate.brand_name.clone()),
    }
}

pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Brand>> {
    let items = Entity::find()
        .order_by_asc(Column::BrandName)
        .order_by_asc(Column::BrandId)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(conn: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Brand>> {
    let result = Entity::find_by_id(id).one(conn).await?;
    Ok(result.map(Into::into))
}

pub async fn exists(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    Ok(Entity::find_by_id(id).count(conn).await? > 0)
}

/// Brand names for the given ids; unknown ids are simply absent.
pub async fn names_by_ids(
    conn: &DatabaseConnection,
    ids: Vec<i32>,
) -> anyhow::Result<HashMap<i32, String>> {
    let rows = Entity::find()
        .filter(Column::BrandId.is_in(ids))
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|m| (m.brand_id, m.brand_name)).collect())
}

pub async fn insert(conn: &DatabaseConnection, aggregate: &Brand) -> anyhow::Result<()> {
    Entity::insert(to_active(aggregate)).exec(conn).await?;
    Ok(())
}

pub async fn update(conn: &DatabaseConnection, aggregate: &Brand) -> anyhow::Result<()> {
    to_active(aggregate).update(conn).await?;
    Ok(())
}

pub async fn delete(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}
