//! Cafe API server
//!
//! A small HTTP API over a single SQLite table of laptop-friendly cafes.
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── auth/          # api-key extractor
//! ├── api/           # routes and handlers
//! ├── db/            # SQLite pool and repository
//! └── utils/         # error types, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-exports
pub use api::{build_app, build_router};
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use utils::logger::init_logger_with_file;
pub use utils::{AppError, AppResult};

// Security logging macro - supports tracing format specifiers
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
