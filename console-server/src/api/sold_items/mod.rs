//! Merchandise order API module
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /api/sold-items | GET | Filtered, paginated table page |
//! | /api/sold-items/export | GET | CSV report over the same filters |
//! | /api/sold-items/{id}/transition | POST | Stage a status change |
//! | /api/sold-items/transition/confirm | POST | Commit the staged change |
//! | /api/sold-items/transition/cancel | POST | Discard the staged change |
//! | /api/sold-items/{id} | DELETE | Delete a Declined record |

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/sold-items", order_routes())
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
