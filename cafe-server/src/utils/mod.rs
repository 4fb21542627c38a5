//! Utilities - shared error, result and logging helpers
//!
//! - [`AppError`] - HTTP-facing error type
//! - [`AppResult`] - handler result alias
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, SuccessResponse, success};
pub use result::AppResult;
