use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, FromQueryResult, Statement, Value};

use crate::dashboards::d401_revenue_over_time::repository::revenue_lines_sql;

#[derive(Debug, Clone, FromQueryResult)]
pub struct CustomerRevenueRow {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub total_revenue: f64,
}

/// Revenue per customer within the optional date range (inclusive).
/// Guest orders without a customer are left out.
pub async fn get_revenue_by_customer(
    conn: &DatabaseConnection,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<Vec<CustomerRevenueRow>> {
    let mut filters = String::new();
    let mut values: Vec<Value> = Vec::new();
    if let Some(start) = start_date {
        filters.push_str(" AND r.d >= ?");
        values.push(start.format("%Y-%m-%d").to_string().into());
    }
    if let Some(end) = end_date {
        filters.push_str(" AND r.d <= ?");
        values.push(end.format("%Y-%m-%d").to_string().into());
    }

    let sql = format!(
        r#"
        SELECT
            c.customer_id AS customer_id,
            c.first_name AS first_name,
            c.last_name AS last_name,
            COALESCE(SUM(r.revenue), 0.0) AS total_revenue
        FROM ({lines}) r
        JOIN customers c ON c.customer_id = r.customer_id
        WHERE r.customer_id IS NOT NULL{filters}
        GROUP BY c.customer_id, c.first_name, c.last_name
        ORDER BY total_revenue DESC, c.customer_id
        "#,
        lines = revenue_lines_sql(),
        filters = filters
    );

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, &sql, values);
    let rows = CustomerRevenueRow::find_by_statement(stmt).all(conn).await?;
    Ok(rows)
}
