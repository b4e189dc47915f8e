use std::sync::Arc;

use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::info;
use tutorhub_api::{config::ApiConfig, init_tracing};
use tutorhub_db::{create_pool, schema::initialize_database, store::PgClassStore};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let config = ApiConfig::from_env()?;
    init_tracing(config.log_level)?;

    info!(
        "Starting TutorHub API v{} (pool size {}, request timeout {}s)",
        env!("CARGO_PKG_VERSION"),
        config.max_connections,
        config.request_timeout
    );

    let db_pool = create_pool(&config.database_url, config.max_connections).await?;
    initialize_database(&db_pool).await?;
    info!("Class store ready");

    let classes = Arc::new(PgClassStore::new(db_pool));
    tutorhub_api::start_server(config, classes).await?;

    info!("TutorHub API stopped");
    Ok(())
}
