use std::path::PathBuf;

use backend::routes;
use backend::shared::config::{self, Config};
use backend::shared::data::{db, seed};
use backend::shared::state::AppState;
use backend::system;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

#[derive(Debug, Parser)]
#[command(name = "bikestore-backend", about = "Bike store REST backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Run a SQL script against the database inside one transaction
    LoadInitialSql {
        /// Script to run; defaults to `[seed] sql_path` from config.toml
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    system::tracing::initialize()?;

    let config = config::load_config()?;
    let db_path = config::get_database_path(&config);
    tracing::info!("Opening database at {}", db_path.display());
    let conn = db::initialize_database(&db_path)
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(conn, &config).await,
        Command::LoadInitialSql { path } => {
            let path = path.unwrap_or_else(|| config::get_seed_path(&config));
            seed::load_sql_file(&conn, &path).await?;
            tracing::info!("Initial data loaded successfully from {}", path.display());
            Ok(())
        }
    }
}

async fn serve(conn: sea_orm::DatabaseConnection, config: &Config) -> anyhow::Result<()> {
    let app = routes::configure_routes(AppState::from_config(conn, config));
    let addr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Stop the other process or change [server] port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
