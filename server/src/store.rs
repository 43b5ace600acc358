use crate::config::{Backend, Config};
use crate::db;
use crate::pg_store::PgRecipeStore;
use crate::AppState;
use recipebox_core::MemoryStore;
use std::sync::Arc;

/// Construct the recipe store selected by `config`.
///
/// Only the postgres backend can fail: an unreachable database aborts startup.
pub async fn create_store(config: &Config) -> Result<AppState, db::DbError> {
    let store: AppState = match &config.backend {
        Backend::Memory => Arc::new(MemoryStore::new()),
        Backend::File { seed_path } => Arc::new(MemoryStore::from_seed_file(seed_path).await),
        Backend::Postgres { database_url } => {
            Arc::new(PgRecipeStore::new(db::create_pool(database_url)?))
        }
    };

    tracing::info!(backend = store.backend_name(), "Recipe store ready");
    Ok(store)
}
