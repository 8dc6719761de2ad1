use sea_orm::DatabaseConnection;

use crate::shared::config::Config;

/// Shared handler state. The connection is a pool handle, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Currency code printed on report responses
    pub currency: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, currency: impl Into<String>) -> Self {
        Self {
            db,
            currency: currency.into(),
        }
    }

    pub fn from_config(db: DatabaseConnection, config: &Config) -> Self {
        Self::new(db, config.report.currency.clone())
    }
}
