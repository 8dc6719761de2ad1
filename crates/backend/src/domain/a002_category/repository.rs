use contracts::domain::a002_category::aggregate::Category;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, Set};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub category_id: i32,
    pub category_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(m: Model) -> Self {
        Category {
            category_id: m.category_id,
            category_name: m.category_name,
        }
    }
}

fn to_active(aggregate: &Category) -> ActiveModel {
    ActiveModel {
        category_id: Set(aggregate.category_id),
        category_name: Set(aggregate.category_name.clone()),
    }
}

pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Category>> {
    let items = Entity::find()
        .order_by_asc(Column::CategoryName)
        .order_by_asc(Column::CategoryId)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(conn: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Category>> {
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
        .filter(Column::CategoryId.is_in(ids))
        .all(conn)
        .await?;
    Ok(rows
        .into_iter()
        .map(|m| (m.category_id, m.category_name))
        .collect())
}

pub async fn insert(conn: &DatabaseConnection, aggregate: &Category) -> anyhow::Result<()> {
    Entity::insert(to_active(aggregate)).exec(conn).await?;
    Ok(())
}

pub async fn update(conn: &DatabaseConnection, aggregate: &Category) -> anyhow::Result<()> {
    to_active(aggregate).update(conn).await?;
    Ok(())
}

pub async fn delete(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}
