use anyhow::Result;
use chrono::NaiveDate;
use contracts::enums::order_status::OrderStatus;
use contracts::enums::report_period::ReportPeriod;
use sea_orm::{DatabaseConnection, FromQueryResult, Statement, Value};

use crate::shared::data::integer_date;

#[derive(Debug, Clone, FromQueryResult)]
pub struct RevenueRow {
    /// First day of the bucket, YYYY-MM-DD
    pub period: String,
    pub total_revenue: f64,
}

/// SQL truncating the ISO date expression `d` to the start of its bucket
pub fn bucket_sql(period: ReportPeriod, d: &str) -> String {
    match period {
        ReportPeriod::Day => d.to_string(),
        ReportPeriod::Week => format!(
            "date({d}, '-' || ((CAST(strftime('%w', {d}) AS INTEGER) + 6) % 7) || ' days')",
            d = d
        ),
        ReportPeriod::Month => format!("strftime('%Y-%m-01', {})", d),
        ReportPeriod::Quarter => format!(
            "printf('%s-%02d-01', strftime('%Y', {d}), ((CAST(strftime('%m', {d}) AS INTEGER) - 1) / 3) * 3 + 1)",
            d = d
        ),
        ReportPeriod::Year => format!("strftime('%Y-01-01', {})", d),
    }
}

/// Order-line revenue with the normalized order date.
/// Only statuses that count as revenue are included.
pub fn revenue_lines_sql() -> String {
    let excluded: Vec<String> = OrderStatus::all()
        .iter()
        .filter(|s| !s.counts_as_revenue())
        .map(|s| s.code().to_string())
        .collect();
    let status_filter = if excluded.is_empty() {
        String::new()
    } else {
        format!("WHERE o.order_status NOT IN ({})", excluded.join(", "))
    };

    format!(
        r#"
        SELECT
            o.customer_id AS customer_id,
            {date} AS d,
            oi.quantity * oi.list_price * (1 - oi.discount) AS revenue
        FROM order_items oi
        JOIN orders o ON o.order_id = oi.order_id
        {status_filter}
        "#,
        date = integer_date::sql_normalized_date("o.order_date"),
        status_filter = status_filter
    )
}

/// Revenue per bucket between the (optional) start date and the end date,
/// inclusive. Buckets without orders are absent.
pub async fn get_revenue_by_period(
    conn: &DatabaseConnection,
    start_date: Option<NaiveDate>,
    end_date: NaiveDate,
    period: ReportPeriod,
) -> Result<Vec<RevenueRow>> {
    let mut values: Vec<Value> = vec![end_date.format("%Y-%m-%d").to_string().into()];
    let mut start_filter = "";
    if let Some(start) = start_date {
        start_filter = " AND r.d >= ?";
        values.push(start.format("%Y-%m-%d").to_string().into());
    }

    let sql = format!(
        r#"
        SELECT
            {bucket} AS period,
            COALESCE(SUM(r.revenue), 0.0) AS total_revenue
        FROM ({lines}) r
        WHERE r.d IS NOT NULL AND r.d <= ?{start_filter}
        GROUP BY period
        ORDER BY period
        "#,
        bucket = bucket_sql(period, "r.d"),
        lines = revenue_lines_sql(),
        start_filter = start_filter
    );

    let stmt = Statement::from_sql_and_values(sea_orm::DatabaseBackend::Sqlite, &sql, values);
    let rows = RevenueRow::find_by_statement(stmt).all(conn).await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;

    #[derive(Debug, FromQueryResult)]
    struct Bucket {
        b: String,
    }

    async fn bucket_of(conn: &DatabaseConnection, period: ReportPeriod, date: &str) -> String {
        let sql = format!("SELECT {} AS b", bucket_sql(period, &format!("'{}'", date)));
        let stmt = Statement::from_string(sea_orm::DatabaseBackend::Sqlite, sql);
        Bucket::find_by_statement(stmt).one(conn).await.unwrap().unwrap().b
    }

    #[tokio::test]
    async fn test_bucket_sql_matches_report_period() {
        let conn = db::initialize_in_memory().await.unwrap();
        let dates = ["2016-01-01", "2017-03-15", "2018-08-26", "2018-12-31"];
        for period in ReportPeriod::ALL {
            for date in dates {
                let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
                let expected = period.bucket_start(parsed).format("%Y-%m-%d").to_string();
                assert_eq!(bucket_of(&conn, period, date).await, expected, "{} {}", period, date);
            }
        }
    }

    #[tokio::test]
    async fn test_normalized_date_accepts_integer_and_text() {
        let conn = db::initialize_in_memory().await.unwrap();
        for raw in ["20170315", "'20170315'", "'2017-03-15'"] {
            let sql = format!("SELECT {} AS b", integer_date::sql_normalized_date(raw));
            let stmt = Statement::from_string(sea_orm::DatabaseBackend::Sqlite, sql);
            let row = Bucket::find_by_statement(stmt).one(&conn).await.unwrap().unwrap();
            assert_eq!(row.b, "2017-03-15", "input {}", raw);
        }
    }
}
