use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::path::Path;

/// Execute a SQL script (typically a dump of INSERT statements) in one
/// transaction. Nothing is kept if any statement fails.
pub async fn load_sql_file(conn: &DatabaseConnection, path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        return Err(anyhow::anyhow!("SQL file not found at {}", path.display()));
    }

    tracing::info!("Loading data from {}", path.display());
    let script = std::fs::read_to_string(path)?;
    load_sql_script(conn, &script).await?;
    tracing::info!("Successfully loaded data from {}", path.display());
    Ok(())
}

pub async fn load_sql_script(conn: &DatabaseConnection, script: &str) -> anyhow::Result<()> {
    let txn = conn.begin().await?;
    if let Err(e) = txn.execute_unprepared(script).await {
        tracing::error!("SQL loading failed, rolling back: {}", e);
        txn.rollback().await?;
        return Err(e.into());
    }
    txn.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;
    use sea_orm::{DatabaseBackend, Statement};

    async fn count_brands(conn: &DatabaseConnection) -> i64 {
        let row = conn
            .query_one(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT COUNT(*) AS n FROM brands".to_string(),
            ))
            .await
            .unwrap()
            .unwrap();
        row.try_get::<i64>("", "n").unwrap()
    }

    #[tokio::test]
    async fn test_script_is_loaded() {
        let conn = db::initialize_in_memory().await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.sql");
        std::fs::write(
            &path,
            "INSERT INTO brands VALUES (1, 'Electra');\nINSERT INTO brands VALUES (2, 'Haro');\n",
        )
        .unwrap();

        load_sql_file(&conn, &path).await.unwrap();
        assert_eq!(count_brands(&conn).await, 2);
    }

    #[tokio::test]
    async fn test_failing_script_rolls_back() {
        let conn = db::initialize_in_memory().await.unwrap();
        let script = "INSERT INTO brands VALUES (1, 'Electra');\nINSERT INTO brands VALUES (1, 'Dup');\n";
        assert!(load_sql_script(&conn, script).await.is_err());
        assert_eq!(count_brands(&conn).await, 0);
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let conn = db::initialize_in_memory().await.unwrap();
        let err = load_sql_file(&conn, Path::new("/nonexistent/seed.sql"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("SQL file not found"));
    }
}
