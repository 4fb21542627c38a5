//! Landing page

use axum::{Router, response::Html, routing::get};

use crate::core::ServerState;

const INDEX_HTML: &str = include_str!("../../../templates/index.html");

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(index))
}

/// GET / - API documentation page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
