//! API key Extractor
//!
//! Pulls the `api-key` query parameter out of the request. Extraction never
//! fails; handlers decide when to call [`ApiKey::authorize`], so an endpoint
//! can check for the target row before checking the key.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::security_log;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct ApiKeyQuery {
    #[serde(rename = "api-key")]
    api_key: Option<String>,
}

/// Caller-supplied shared secret, if any
#[derive(Debug, Clone, Default)]
pub struct ApiKey(pub Option<String>);

impl ApiKey {
    /// Succeed only when the supplied key equals the configured secret
    pub fn authorize(&self, state: &ServerState, action: &'static str) -> AppResult<()> {
        if state.config.api_key_matches(self.0.as_deref()) {
            return Ok(());
        }
        security_log!(
            "WARN",
            "api_key_rejected",
            action = action,
            key_present = self.0.is_some()
        );
        Err(AppError::invalid_api_key())
    }
}

impl FromRequestParts<ServerState> for ApiKey {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let key = Query::<ApiKeyQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.api_key);
        Ok(ApiKey(key))
    }
}
