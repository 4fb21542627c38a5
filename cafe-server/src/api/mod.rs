//! API routes
//!
//! - [`home`] - landing page
//! - [`health`] - health checks
//! - [`cafes`] - cafe catalogue

pub mod cafes;
pub mod health;
pub mod home;

use axum::Router;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::AppError;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID generator (UUID v4)
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Unmatched routes answer with the JSON not-found body
async fn fallback() -> AppError {
    AppError::cafe_not_found()
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(home::router())
        .merge(health::router())
        .merge(cafes::router())
        .fallback(fallback)
}

/// Build the application with all middleware; the caller supplies the state
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - any origin
        .layer(CorsLayer::permissive())
        // Trace - request spans at INFO level
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, so the trace span sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
}
