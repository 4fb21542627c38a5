//! Cafe API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /random | GET | - |
//! | /all | GET | - |
//! | /search?loc= | GET | - |
//! | /add?api-key= | POST | api-key |
//! | /update-price/{id}?new_price= | PATCH | optional api-key |
//! | /report-closed/{id}?api-key= | DELETE | api-key |

mod form;
mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    let read_routes = Router::new()
        .route("/random", get(handler::random))
        .route("/all", get(handler::list))
        .route("/search", get(handler::search));

    let manage_routes = Router::new()
        .route("/add", post(handler::create))
        .route("/update-price/{id}", patch(handler::update_price))
        .route("/report-closed/{id}", delete(handler::report_closed));

    read_routes.merge(manage_routes)
}
