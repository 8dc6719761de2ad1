use anyhow::Result;
use sea_orm::{DatabaseConnection, FromQueryResult, Statement, Value};

/// Stock row with whatever store/product data the LEFT JOINs found
#[derive(Debug, Clone, FromQueryResult)]
pub struct InventoryRow {
    pub store_name: Option<String>,
    pub product_id: Option<i32>,
    pub product_name: Option<String>,
    pub quantity: i32,
}

/// Stock rows ordered by store name, then product name
pub async fn get_inventory_rows(
    conn: &DatabaseConnection,
    store_id: Option<i32>,
) -> Result<Vec<InventoryRow>> {
    let mut sql = String::from(
        r#"
        SELECT
            st.store_name AS store_name,
            p.product_id AS product_id,
            p.product_name AS product_name,
            s.quantity AS quantity
        FROM stocks s
        LEFT JOIN stores st ON st.store_id = s.store_id
        LEFT JOIN products p ON p.product_id = s.product_id
        "#,
    );
    let mut values: Vec<Value> = Vec::new();
    if let Some(id) = store_id {
        sql.push_str(" WHERE s.store_id = ?");
        values.push(id.into());
    }
    sql.push_str(" ORDER BY st.store_name, p.product_name, s.product_id");

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, &sql, values);
    let rows = InventoryRow::find_by_statement(stmt).all(conn).await?;
    Ok(rows)
}
