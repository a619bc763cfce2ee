//! Ticket order API module
//!
//! Same surface as the merchandise table, over the ticket collection.

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sold-tickets", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/export", get(handler::export))
        .route("/{id}/transition", post(handler::request_transition))
        .route("/transition/confirm", post(handler::confirm_transition))
        .route("/transition/cancel", post(handler::cancel_transition))
        .route("/{id}", delete(handler::delete_record))
}
