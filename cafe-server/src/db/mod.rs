//! Database Module
//!
//! Handles the SQLite connection pool and migrations

pub mod repository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;

use crate::core::{Config, Result, ServerError};

/// Database service, owns the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database file with WAL mode and apply migrations
    pub async fn new(config: &Config) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", config.database_path))
            .map_err(|e| ServerError::Config(format!("Invalid database path: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .optimize_on_close(true, None);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_db_connections.max(1))
            .connect_with(options)
            .await?;

        // busy_timeout: 写冲突时等待 5s 而非立即失败
        sqlx::query("PRAGMA busy_timeout = 5000;")
            .execute(&pool)
            .await?;

        tracing::info!(
            path = %config.database_path,
            "Database connection established (SQLite WAL, busy_timeout=5000ms)"
        );

        Self::migrate(&pool).await?;

        Ok(Self { pool })
    }

    async fn migrate(pool: &SqlitePool) -> Result<()> {
        sqlx::migrate!("./migrations").run(pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }
}
