use contracts::domain::a005_stock::aggregate::{Stock, StockKey, StockView};
use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, FromQueryResult, Set, Statement};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stocks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub store_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Stock {
    fn from(m: Model) -> Self {
        Stock {
            store_id: m.store_id,
            product_id: m.product_id,
            quantity: m.quantity,
        }
    }
}

fn to_active(aggregate: &Stock) -> ActiveModel {
    ActiveModel {
        store_id: Set(aggregate.store_id),
        product_id: Set(aggregate.product_id),
        quantity: Set(aggregate.quantity),
    }
}

/// Stock row joined with store and product names
#[derive(Debug, Clone, FromQueryResult)]
struct StockViewRow {
    store_id: i32,
    store_name: String,
    product_id: i32,
    product_name: String,
    quantity: i32,
}

impl From<StockViewRow> for StockView {
    fn from(r: StockViewRow) -> Self {
        StockView {
            store_id: r.store_id,
            store_name: r.store_name,
            product_id: r.product_id,
            product_name: r.product_name,
            quantity: r.quantity,
        }
    }
}

const VIEW_SELECT: &str = r#"
    SELECT
        s.store_id,
        st.store_name,
        s.product_id,
        p.product_name,
        s.quantity
    FROM stocks s
    JOIN stores st ON st.store_id = s.store_id
    JOIN products p ON p.product_id = s.product_id
"#;

/// Stock rows with names, optionally restricted to one store and/or product
pub async fn list_views(
    conn: &DatabaseConnection,
    store_id: Option<i32>,
    product_id: Option<i32>,
) -> anyhow::Result<Vec<StockView>> {
    let mut conditions: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();
    if let Some(id) = store_id {
        conditions.push("s.store_id = ?");
        values.push(id.into());
    }
    if let Some(id) = product_id {
        conditions.push("s.product_id = ?");
        values.push(id.into());
    }

    let mut sql = VIEW_SELECT.to_string();
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push_str(" ORDER BY s.store_id, s.product_id");

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, &sql, values);
    let rows = StockViewRow::find_by_statement(stmt).all(conn).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

pub async fn get_view(conn: &DatabaseConnection, key: StockKey) -> anyhow::Result<Option<StockView>> {
    let views = list_views(conn, Some(key.store_id), Some(key.product_id)).await?;
    Ok(views.into_iter().next())
}

pub async fn get_by_key(conn: &DatabaseConnection, key: StockKey) -> anyhow::Result<Option<Stock>> {
    let result = Entity::find_by_id((key.store_id, key.product_id))
        .one(conn)
        .await?;
    Ok(result.map(Into::into))
}

pub async fn insert(conn: &DatabaseConnection, aggregate: &Stock) -> anyhow::Result<()> {
    Entity::insert(to_active(aggregate)).exec(conn).await?;
    Ok(())
}

pub async fn update(conn: &DatabaseConnection, aggregate: &Stock) -> anyhow::Result<()> {
    to_active(aggregate).update(conn).await?;
    Ok(())
}

pub async fn delete(conn: &DatabaseConnection, key: StockKey) -> anyhow::Result<bool> {
    let result = Entity::delete_by_id((key.store_id, key.product_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected > 0)
}
