//! Shared types for the cafe catalogue
//!
//! Data models used by the HTTP server and by any client consuming its API.

pub mod models;

// Re-exports
pub use models::{Cafe, CafeCreate};
