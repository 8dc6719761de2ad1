use contracts::domain::a009_order_item::aggregate::{OrderItem, OrderItemKey};
use contracts::shared::money::{self, PRICE_SCALE};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub item_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub list_price: f64,
    pub discount: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for OrderItem {
    fn from(m: Model) -> Self {
        OrderItem {
            order_id: m.order_id,
            item_id: m.item_id,
            product_id: m.product_id,
            quantity: m.quantity,
            list_price: money::from_f64(m.list_price, PRICE_SCALE),
            discount: money::from_f64(m.discount, PRICE_SCALE),
        }
    }
}

fn to_active(aggregate: &OrderItem) -> ActiveModel {
    ActiveModel {
        order_id: Set(aggregate.order_id),
        item_id: Set(aggregate.item_id),
        product_id: Set(aggregate.product_id),
        quantity: Set(aggregate.quantity),
        list_price: Set(money::to_f64(aggregate.list_price)),
        discount: Set(money::to_f64(aggregate.discount)),
    }
}

pub async fn list(conn: &DatabaseConnection, order_id: Option<i32>) -> anyhow::Result<Vec<OrderItem>> {
    let mut query = Entity::find();
    if let Some(order_id) = order_id {
        query = query.filter(Column::OrderId.eq(order_id));
    }

    let items = query
        .order_by_asc(Column::OrderId)
        .order_by_asc(Column::ItemId)
        .all(conn)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_key(
    conn: &DatabaseConnection,
    key: OrderItemKey,
) -> anyhow::Result<Option<OrderItem>> {
    let result = Entity::find_by_id((key.order_id, key.item_id))
        .one(conn)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(conn: &DatabaseConnection, aggregate: &OrderItem) -> anyhow::Result<()> {
    Entity::insert(to_active(aggregate)).exec(conn).await?;
    Ok(())
}

pub async fn update(conn: &DatabaseConnection, aggregate: &OrderItem) -> anyhow::Result<()> {
    to_active(aggregate).update(conn).await?;
    Ok(())
}

pub async fn delete(conn: &DatabaseConnection, key: OrderItemKey) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id((key.order_id, key.item_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected > 0)
}
