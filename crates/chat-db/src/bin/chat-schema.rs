//! Schema bootstrap
//!
//! Run with:
//! ```bash
//! cargo run -p chat-db --bin chat-schema            # create missing tables
//! cargo run -p chat-db --bin chat-schema -- --drop  # drop and recreate
//! ```
//!
//! Connection settings come from `DATABASE_URL`; in production the tables
//! live in the namespace named by `SCHEMA`.

use chat_common::{try_init_tracing, AppConfig};
use chat_db::pool::{create_pool, DatabaseConfig};
use chat_db::schema::{apply_schema, drop_schema, TableNames};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    let drop_first = std::env::args().skip(1).any(|arg| arg == "--drop");

    if let Err(e) = run(drop_first).await {
        error!(error = %e, "Schema bootstrap failed");
        std::process::exit(1);
    }
}

async fn run(drop_first: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    let tables = TableNames::from_config(&config)?;

    info!(
        env = ?config.app.env,
        namespace = ?tables.namespace(),
        "Configuration loaded"
    );

    let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;

    if drop_first {
        drop_schema(&pool, &tables).await?;
    }
    apply_schema(&pool, &tables).await?;

    pool.close().await;

    Ok(())
}
