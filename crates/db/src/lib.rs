pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;
pub mod unit_of_work;

use eyre::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Pool for database-backed tests, or `None` when `TEST_DATABASE_URL` is unset
///
/// The schema is applied once per test binary so that concurrently running
/// tests never race on `CREATE TABLE`.
#[cfg(test)]
pub(crate) async fn create_test_pool() -> Option<DbPool> {
    static SCHEMA_READY: tokio::sync::OnceCell<()> = tokio::sync::OnceCell::const_new();

    let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
        tracing::warn!("TEST_DATABASE_URL not set, skipping database test");
        return None;
    };

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    SCHEMA_READY
        .get_or_init(|| async {
            schema::initialize_database(&pool)
                .await
                .expect("Failed to initialize test database schema");
        })
        .await;

    Some(pool)
}
