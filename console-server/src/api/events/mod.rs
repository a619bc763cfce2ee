//! Event API module

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/events", get(handler::list))
        .route("/api/events/recent", get(handler::recent))
}
