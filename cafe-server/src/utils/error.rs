//! 统一错误处理
//!
//! - [`AppError`] - 应用错误枚举, 渲染为 `{"error": {"<Reason>": "<message>"}}`
//! - [`SuccessResponse`] - 写操作成功响应, 渲染为 `{"response": {"success": "<message>"}}`
//!
//! `<Reason>` is the canonical reason phrase of the status code, so a missing
//! cafe renders as `{"error": {"Not Found": "..."}}`.
//!
//! # Example
//!
//! ```ignore
//! Err(AppError::not_found("Sorry, we don't have a cafe at that location."))
//!
//! Ok(success("Successfully added the new cafe."))
//! ```

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Message for unknown ids and unmatched routes
pub const CAFE_NOT_FOUND: &str = "Sorry a cafe with that id was not found in the database.";

/// Message for a rejected api-key
pub const FORBIDDEN_API_KEY: &str =
    "Sorry, that's not allowed. Make sure you have the correct api_key.";

/// Message for a duplicate cafe name
pub const CAFE_NAME_EXISTS: &str = "Sorry, a cafe with that name already exists.";

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Permission denied: {0}")]
    /// 403
    Forbidden(String),

    #[error("Resource not found: {0}")]
    /// 404
    NotFound(String),

    #[error("Resource already exists: {0}")]
    /// 409
    Conflict(String),

    #[error("Validation failed: {0}")]
    /// 400
    Validation(String),

    #[error("Database error: {0}")]
    /// 500
    Database(String),
}

/// Error body: `{"error": {"<Reason>": "<message>"}}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: BTreeMap<&'static str, String>,
}

/// Success body for writes: `{"response": {"success": "<message>"}}`
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub response: SuccessMessage,
}

#[derive(Debug, Serialize)]
pub struct SuccessMessage {
    pub success: String,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Unknown cafe id (also used for unmatched routes)
    pub fn cafe_not_found() -> Self {
        Self::NotFound(CAFE_NOT_FOUND.to_string())
    }

    /// Missing or wrong api-key
    pub fn invalid_api_key() -> Self {
        Self::Forbidden(FORBIDDEN_API_KEY.to_string())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; system errors are not leaked
    fn public_message(&self) -> String {
        match self {
            AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::Validation(msg) => msg.clone(),
            AppError::Database(_) => "Database error".to_string(),
        }
    }

    pub fn body(&self) -> ErrorBody {
        let reason = self.status().canonical_reason().unwrap_or("Error");
        ErrorBody {
            error: BTreeMap::from([(reason, self.public_message())]),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(msg) = &self {
            error!(target: "database", error = %msg, "Database error occurred");
        }

        (self.status(), Json(self.body())).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(_) => AppError::cafe_not_found(),
            RepoError::Duplicate(_) => AppError::conflict(CAFE_NAME_EXISTS),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

// ========== Helper functions ==========

/// Create a write acknowledgement
pub fn success(message: impl Into<String>) -> Json<SuccessResponse> {
    Json(SuccessResponse {
        response: SuccessMessage {
            success: message.into(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::invalid_api_key().status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::cafe_not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::conflict("dup").status(), StatusCode::CONFLICT);
        assert_eq!(AppError::validation("bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Database("locked".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_body_uses_reason_phrase() {
        let body = serde_json::to_value(AppError::cafe_not_found().body()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": { "Not Found": CAFE_NOT_FOUND } })
        );

        let body = serde_json::to_value(AppError::invalid_api_key().body()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": { "Forbidden": FORBIDDEN_API_KEY } })
        );
    }

    #[test]
    fn test_database_error_is_not_leaked() {
        let body = serde_json::to_value(AppError::Database("disk I/O error".into()).body()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": { "Internal Server Error": "Database error" } })
        );
    }

    #[test]
    fn test_repo_error_conversion() {
        assert!(matches!(
            AppError::from(RepoError::Duplicate("UNIQUE constraint failed: cafe.name".into())),
            AppError::Conflict(msg) if msg == CAFE_NAME_EXISTS
        ));
        assert!(matches!(
            AppError::from(RepoError::NotFound("Cafe 9 not found".into())),
            AppError::NotFound(msg) if msg == CAFE_NOT_FOUND
        ));
    }

    #[test]
    fn test_success_shape() {
        let Json(body) = success("Successfully updated the price.");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "response": { "success": "Successfully updated the price." } })
        );
    }
}
