use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, SqlxSqliteConnector, Statement};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Open (creating if needed) the SQLite database file and bootstrap the schema.
pub async fn initialize_database(db_path: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    tracing::info!("Opening database: {}", db_path.display());

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    let conn = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
    ensure_schema(&conn).await?;
    Ok(conn)
}

/// Private in-memory database with the full schema.
///
/// A single pooled connection that never expires, so every query sees the
/// same memory database.
pub async fn initialize_in_memory() -> anyhow::Result<DatabaseConnection> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    let conn = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
    ensure_schema(&conn).await?;
    Ok(conn)
}

/// Table definitions in dependency order.
const SCHEMA: &[(&str, &str)] = &[
    (
        "brands",
        r#"
        CREATE TABLE IF NOT EXISTS brands (
            brand_id INTEGER PRIMARY KEY NOT NULL,
            brand_name TEXT NOT NULL
        );
        "#,
    ),
    (
        "categories",
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            category_id INTEGER PRIMARY KEY NOT NULL,
            category_name TEXT NOT NULL
        );
        "#,
    ),
    (
        "products",
        r#"
        CREATE TABLE IF NOT EXISTS products (
            product_id INTEGER PRIMARY KEY NOT NULL,
            product_name TEXT NOT NULL,
            brand_id INTEGER NOT NULL REFERENCES brands(brand_id) ON DELETE CASCADE,
            category_id INTEGER NOT NULL REFERENCES categories(category_id) ON DELETE CASCADE,
            model_year INTEGER NOT NULL,
            list_price REAL NOT NULL
        );
        "#,
    ),
    (
        "stores",
        r#"
        CREATE TABLE IF NOT EXISTS stores (
            store_id INTEGER PRIMARY KEY NOT NULL,
            store_name TEXT NOT NULL,
            phone TEXT,
            email TEXT,
            street TEXT,
            city TEXT,
            state TEXT,
            zip_code TEXT
        );
        "#,
    ),
    (
        "stocks",
        r#"
        CREATE TABLE IF NOT EXISTS stocks (
            store_id INTEGER NOT NULL REFERENCES stores(store_id) ON DELETE CASCADE,
            product_id INTEGER NOT NULL REFERENCES products(product_id) ON DELETE CASCADE,
            quantity INTEGER NOT NULL DEFAULT 0,
            PRIMARY KEY (store_id, product_id)
        );
        "#,
    ),
    (
        "customers",
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            customer_id INTEGER PRIMARY KEY NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            phone TEXT,
            email TEXT NOT NULL,
            street TEXT,
            city TEXT,
            state TEXT,
            zip_code TEXT
        );
        "#,
    ),
    (
        "staffs",
        r#"
        CREATE TABLE IF NOT EXISTS staffs (
            staff_id INTEGER PRIMARY KEY NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            phone TEXT,
            active INTEGER NOT NULL,
            store_id INTEGER NOT NULL REFERENCES stores(store_id) ON DELETE CASCADE,
            manager_id INTEGER REFERENCES staffs(staff_id) ON DELETE SET NULL
        );
        "#,
    ),
    // staff_id carries no ON DELETE action: deleting a store removes its
    // staff and orders in one statement, while a direct staff delete is
    // checked for referencing orders by the staff service.
    (
        "orders",
        r#"
        CREATE TABLE IF NOT EXISTS orders (
            order_id INTEGER PRIMARY KEY NOT NULL,
            customer_id INTEGER REFERENCES customers(customer_id) ON DELETE CASCADE,
            order_status INTEGER NOT NULL,
            order_date INTEGER NOT NULL,
            required_date INTEGER NOT NULL,
            shipped_date INTEGER,
            store_id INTEGER NOT NULL REFERENCES stores(store_id) ON DELETE CASCADE,
            staff_id INTEGER NOT NULL REFERENCES staffs(staff_id)
        );
        "#,
    ),
    (
        "order_items",
        r#"
        CREATE TABLE IF NOT EXISTS order_items (
            order_id INTEGER NOT NULL REFERENCES orders(order_id) ON DELETE CASCADE,
            item_id INTEGER NOT NULL,
            product_id INTEGER NOT NULL REFERENCES products(product_id) ON DELETE CASCADE,
            quantity INTEGER NOT NULL,
            list_price REAL NOT NULL,
            discount REAL NOT NULL DEFAULT 0,
            PRIMARY KEY (order_id, item_id)
        );
        "#,
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_products_brand ON products(brand_id);",
    "CREATE INDEX IF NOT EXISTS idx_products_category ON products(category_id);",
    "CREATE INDEX IF NOT EXISTS idx_stocks_product ON stocks(product_id);",
    "CREATE INDEX IF NOT EXISTS idx_staffs_store ON staffs(store_id);",
    "CREATE INDEX IF NOT EXISTS idx_staffs_manager ON staffs(manager_id);",
    "CREATE INDEX IF NOT EXISTS idx_orders_customer ON orders(customer_id);",
    "CREATE INDEX IF NOT EXISTS idx_orders_store ON orders(store_id);",
    "CREATE INDEX IF NOT EXISTS idx_orders_staff ON orders(staff_id);",
    "CREATE INDEX IF NOT EXISTS idx_orders_date ON orders(order_date);",
    "CREATE INDEX IF NOT EXISTS idx_order_items_product ON order_items(product_id);",
];

/// Create every table and index that does not exist yet.
pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let existing = existing_tables(conn).await?;

    for (table, ddl) in SCHEMA {
        if existing.iter().any(|name| name == table) {
            tracing::debug!("Table {} already exists", table);
            continue;
        }
        tracing::info!("Creating table {}", table);
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, ddl.to_string()))
            .await?;
    }

    for ddl in INDEXES {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, ddl.to_string()))
            .await?;
    }

    Ok(())
}

async fn existing_tables(conn: &DatabaseConnection) -> anyhow::Result<Vec<String>> {
    let rows = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT name FROM sqlite_master WHERE type='table';".to_string(),
        ))
        .await?;

    let mut names = Vec::with_capacity(rows.len());
    for row in rows {
        names.push(row.try_get::<String>("", "name")?);
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_bootstrap_is_idempotent() {
        let conn = initialize_in_memory().await.unwrap();
        ensure_schema(&conn).await.unwrap();

        let tables = existing_tables(&conn).await.unwrap();
        for (table, _) in SCHEMA {
            assert!(tables.iter().any(|t| t == table), "missing table {}", table);
        }
    }

    #[tokio::test]
    async fn test_foreign_keys_are_enforced() {
        let conn = initialize_in_memory().await.unwrap();
        let result = conn
            .execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                "INSERT INTO products VALUES (1, 'Orphan', 99, 99, 2020, 10.0);".to_string(),
            ))
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_file_database_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("bikes.db");
        let conn = initialize_database(&path).await.unwrap();
        assert!(path.exists());
        drop(conn);
    }
}
