//! Event API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::Event;
use crate::utils::{AppError, AppResult};

/// Number of events shown on the dashboard listing
const RECENT_EVENT_LIMIT: usize = 3;

/// GET /api/events
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Event>>> {
    let events = state.events().find_all().await.map_err(AppError::fetch)?;
    Ok(Json(events))
}

/// GET /api/events/recent - newest events first, dashboard-sized
pub async fn recent(State(state): State<ServerState>) -> AppResult<Json<Vec<Event>>> {
    let events = state
        .events()
        .find_recent(RECENT_EVENT_LIMIT)
        .await
        .map_err(AppError::fetch)?;
    Ok(Json(events))
}
