use contracts::domain::a006_customer::aggregate::{Customer, CustomerFilter};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub email: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Customer {
    fn from(m: Model) -> Self {
        Customer {
            customer_id: m.customer_id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            street: m.street,
            city: m.city,
            state: m.state,
            zip_code: m.zip_code,
        }
    }
}

fn to_active(aggregate: &Customer) -> ActiveModel {
    ActiveModel {
        customer_id: Set(aggregate.customer_id),
        first_name: Set(aggregate.first_name.clone()),
        last_name: Set(aggregate.last_name.clone()),
        phone: Set(aggregate.phone.clone()),
        email: Set(aggregate.email.clone()),
        street: Set(aggregate.street.clone()),
        city: Set(aggregate.city.clone()),
        state: Set(aggregate.state.clone()),
        zip_code: Set(aggregate.zip_code.clone()),
    }
}

pub async fn list(conn: &DatabaseConnection, filter: &CustomerFilter) -> anyhow::Result<Vec<Customer>> {
    let mut query = Entity::find();
    if let Some(city) = &filter.city {
        query = query.filter(Column::City.eq(city.as_str()));
    }
    if let Some(state) = &filter.state {
        query = query.filter(Column::State.eq(state.as_str()));
    }

    let items = query
        .order_by_asc(Column::CustomerId)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(conn: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Customer>> {
    let result = Entity::find_by_id(id).one(conn).await?;
    Ok(result.map(Into::into))
}

pub async fn exists(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    Ok(Entity::find_by_id(id).count(conn).await? > 0)
}

pub async fn insert(conn: &DatabaseConnection, aggregate: &Customer) -> anyhow::Result<()> {
    Entity::insert(to_active(aggregate)).exec(conn).await?;
    Ok(())
}

pub async fn update(conn: &DatabaseConnection, aggregate: &Customer) -> anyhow::Result<()> {
    to_active(aggregate).update(conn).await?;
    Ok(())
}

/// The customer's orders are removed with it (ON DELETE CASCADE).
pub async fn delete(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}
