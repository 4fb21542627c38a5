//! Shared-secret authorization
//!
//! - [`ApiKey`] - extractor for the `api-key` query parameter

pub mod api_key;

pub use api_key::ApiKey;
