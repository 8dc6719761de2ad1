use contracts::domain::a004_store::aggregate::Store;
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, Set};
use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub store_id: i32,
    pub store_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Store {
    fn from(m: Model) -> Self {
        Store {
            store_id: m.store_id,
            store_name: m.store_name,
            phone: m.phone,
            email: m.email,
            street: m.street,
            city: m.city,
            state: m.state,
            zip_code: m.zip_code,
        }
    }
}

fn to_active(aggregate: &Store) -> ActiveModel {
    ActiveModel {
        store_id: Set(aggregate.store_id),
        store_name: Set(aggregate.store_name.clone()),
        phone: Set(aggregate.phone.clone()),
        email: Set(aggregate.email.clone()),
        street: Set(aggregate.street.clone()),
        city: Set(aggregate.city.clone()),
        state: Set(aggregate.state.clone()),
        zip_code: Set(aggregate.zip_code.clone()),
    }
}

pub async fn list_all(conn: &DatabaseConnection) -> anyhow::Result<Vec<Store>> {
    let items = Entity::find()
        .order_by_asc(Column::StoreId)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(conn: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Store>> {
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
        .filter(Column::StoreId.is_in(ids))
        .all(conn)
        .await?;
    Ok(rows.into_iter().map(|m| (m.store_id, m.store_name)).collect())
}

pub async fn insert(conn: &DatabaseConnection, aggregate: &Store) -> anyhow::Result<()> {
    Entity::insert(to_active(aggregate)).exec(conn).await?;
    Ok(())
}

pub async fn update(conn: &DatabaseConnection, aggregate: &Store) -> anyhow::Result<()> {
    to_active(aggregate).update(conn).await?;
    Ok(())
}

/// Staff, orders and stock of the store go with it (ON DELETE CASCADE).
pub async fn delete(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}
