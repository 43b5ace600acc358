use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, PoolError};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use thiserror::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("Failed to run database migrations: {0}")]
    Migration(String),

    #[error("Database health check failed: {0}")]
    HealthCheck(#[from] diesel::result::Error),
}

/// Build the connection pool, apply pending migrations and verify the
/// database answers queries. Any failure here is fatal at startup.
pub fn create_pool(database_url: &str) -> Result<DbPool, DbError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder().build(manager)?;

    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbError::Migration(e.to_string()))?;

    diesel::sql_query("SELECT 1").execute(&mut conn)?;
    tracing::info!("Connected to PostgreSQL");

    Ok(pool)
}
