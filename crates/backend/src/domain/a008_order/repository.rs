use contracts::domain::a008_order::aggregate::{Order, OrderFilter};
use contracts::enums::order_status::OrderStatus;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{EntityTrait, FromQueryResult, QueryFilter, QueryOrder, QuerySelect, Select, Set};

use crate::shared::data::integer_date;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i32,
    pub customer_id: Option<i32>,
    pub order_status: i32,
    /// YYYYMMDD
    pub order_date: i32,
    pub required_date: i32,
    pub shipped_date: Option<i32>,
    pub store_id: i32,
    pub staff_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Order row as read back. Date columns are cast to text so rows holding
/// ISO text from older dumps load alongside `YYYYMMDD` integers.
#[derive(Debug, Clone, FromQueryResult)]
struct OrderRow {
    order_id: i32,
    customer_id: Option<i32>,
    order_status: i32,
    order_date: Option<String>,
    required_date: Option<String>,
    shipped_date: Option<String>,
    store_id: i32,
    staff_id: i32,
}

impl TryFrom<OrderRow> for Order {
    type Error = anyhow::Error;

    fn try_from(r: OrderRow) -> Result<Self, Self::Error> {
        let order_status = OrderStatus::from_code(i64::from(r.order_status)).ok_or_else(|| {
            anyhow::anyhow!("order {} has unknown status {}", r.order_id, r.order_status)
        })?;
        let order_date = integer_date::decode_text(r.order_date.as_deref());
        if order_date.is_none() {
            tracing::warn!("Order {} has undecodable order_date {:?}", r.order_id, r.order_date);
        }

        Ok(Order {
            order_id: r.order_id,
            customer_id: r.customer_id,
            order_status,
            order_date,
            required_date: integer_date::decode_text(r.required_date.as_deref()),
            shipped_date: integer_date::decode_text(r.shipped_date.as_deref()),
            store_id: r.store_id,
            staff_id: r.staff_id,
        })
    }
}

fn select_rows() -> Select<Entity> {
    let as_text = |column: &str| Expr::cust(format!("CAST({} AS TEXT)", column));
    Entity::find()
        .select_only()
        .column(Column::OrderId)
        .column(Column::CustomerId)
        .column(Column::OrderStatus)
        .column_as(as_text("order_date"), "order_date")
        .column_as(as_text("required_date"), "required_date")
        .column_as(as_text("shipped_date"), "shipped_date")
        .column(Column::StoreId)
        .column(Column::StaffId)
}

/// Callers validate first; both required dates are present by then.
fn to_active(aggregate: &Order) -> anyhow::Result<ActiveModel> {
    let order_date = aggregate
        .order_date
        .ok_or_else(|| anyhow::anyhow!("order {} has no order_date", aggregate.order_id))?;
    let required_date = aggregate
        .required_date
        .ok_or_else(|| anyhow::anyhow!("order {} has no required_date", aggregate.order_id))?;
    Ok(ActiveModel {
        order_id: Set(aggregate.order_id),
        customer_id: Set(aggregate.customer_id),
        order_status: Set(aggregate.order_status.code()),
        order_date: Set(integer_date::encode(order_date)),
        required_date: Set(integer_date::encode(required_date)),
        shipped_date: Set(integer_date::encode_opt(aggregate.shipped_date)),
        store_id: Set(aggregate.store_id),
        staff_id: Set(aggregate.staff_id),
    })
}

pub async fn list(conn: &DatabaseConnection, filter: &OrderFilter) -> anyhow::Result<Vec<Order>> {
    let mut query = select_rows();
    if let Some(customer_id) = filter.customer_id {
        query = query.filter(Column::CustomerId.eq(customer_id));
    }
    if let Some(store_id) = filter.store_id {
        query = query.filter(Column::StoreId.eq(store_id));
    }
    if let Some(staff_id) = filter.staff_id {
        query = query.filter(Column::StaffId.eq(staff_id));
    }
    if let Some(status) = filter.order_status {
        query = query.filter(Column::OrderStatus.eq(status.code()));
    }

    query
        .order_by_asc(Column::OrderId)
        .into_model::<OrderRow>()
        .all(conn)
        .await?
        .into_iter()
        .map(Order::try_from)
        .collect()
}

pub async fn get_by_id(conn: &DatabaseConnection, id: i32) -> anyhow::Result<Option<Order>> {
    select_rows()
        .filter(Column::OrderId.eq(id))
        .into_model::<OrderRow>()
        .one(conn)
        .await?
        .map(Order::try_from)
        .transpose()
}

pub async fn exists(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    Ok(Entity::find_by_id(id).count(conn).await? > 0)
}

pub async fn count_by_staff(conn: &DatabaseConnection, staff_id: i32) -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::StaffId.eq(staff_id))
        .count(conn)
        .await?)
}

pub async fn insert(conn: &DatabaseConnection, aggregate: &Order) -> anyhow::Result<()> {
    Entity::insert(to_active(aggregate)?).exec(conn).await?;
    Ok(())
}

pub async fn update(conn: &DatabaseConnection, aggregate: &Order) -> anyhow::Result<()> {
    to_active(aggregate)?.update(conn).await?;
    Ok(())
}

/// Order items are removed with the order (ON DELETE CASCADE).
pub async fn delete(conn: &DatabaseConnection, id: i32) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected > 0)
}
