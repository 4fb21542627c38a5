use std::sync::Arc;

use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;

/// Server state - shared by every request handler
///
/// Cloning is cheap: the config sits behind an `Arc` and the pool is itself
/// reference-counted.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Arc<Config> | Immutable configuration, including the shared secret |
/// | db | DbService | SQLite connection pool |
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
}

impl ServerState {
    /// Open the database described by `config` and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(config).await?;
        Ok(Self {
            config: Arc::new(config.clone()),
            db,
        })
    }

    /// Connection pool shortcut for handlers
    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
