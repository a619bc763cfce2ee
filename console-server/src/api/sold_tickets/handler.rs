//! Ticket order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::api::{OrderTableQuery, TablePage};
use crate::core::ServerState;
use crate::db::models::{OrderStatus, SoldTicket};
use crate::reporting::sold_tickets_report;
use crate::utils::{AppError, AppResult};
use crate::workflow::StagedTransition;

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub target: OrderStatus,
}

/// GET /api/sold-tickets
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderTableQuery>,
) -> AppResult<Json<TablePage<SoldTicket>>> {
    let view = query.into_view(state.config.page_size)?;
    let records = state.sold_ticket_repo().find_all().await.map_err(AppError::fetch)?;

    let mut engine = state.sold_tickets.lock().await;
    engine.load(records);

    let selection = view.select(engine.records());
    Ok(Json(TablePage {
        page: selection.page,
        total_pages: selection.total_pages,
        total_rows: selection.total_rows,
        items: selection.items.into_iter().cloned().collect(),
    }))
}

/// POST /api/sold-tickets/{id}/transition
pub async fn request_transition(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(request): Json<TransitionRequest>,
) -> AppResult<Json<StagedTransition>> {
    let mut engine = state.sold_tickets.lock().await;
    engine.request_transition(&id, request.target)?;
    let staged = engine
        .staged()
        .cloned()
        .ok_or_else(|| AppError::internal("Staged transition missing after request"))?;
    Ok(Json(staged))
}

/// POST /api/sold-tickets/transition/confirm
pub async fn confirm_transition(
    State(state): State<ServerState>,
) -> AppResult<Json<SoldTicket>> {
    let repo = state.sold_ticket_repo();
    let mut engine = state.sold_tickets.lock().await;
    let updated = engine.confirm_transition(&repo).await?.clone();
    tracing::info!(buyer = %updated.full_name, status = %updated.status, "Ticket status updated");
    Ok(Json(updated))
}

/// POST /api/sold-tickets/transition/cancel
pub async fn cancel_transition(State(state): State<ServerState>) -> AppResult<Json<serde_json::Value>> {
    let mut engine = state.sold_tickets.lock().await;
    engine.cancel_transition();
    Ok(Json(serde_json::json!({ "cancelled": true })))
}

/// DELETE /api/sold-tickets/{id}
pub async fn delete_record(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SoldTicket>> {
    let repo = state.sold_ticket_repo();
    let mut engine = state.sold_tickets.lock().await;
    let removed = engine.delete_record(&repo, &id).await?;
    tracing::info!(buyer = %removed.full_name, "Ticket order deleted");
    Ok(Json(removed))
}

/// GET /api/sold-tickets/export
pub async fn export(
    State(state): State<ServerState>,
    Query(query): Query<OrderTableQuery>,
) -> AppResult<impl IntoResponse> {
    let view = query.into_view(state.config.page_size)?;
    let records = state.sold_ticket_repo().find_all().await.map_err(AppError::fetch)?;
    let filtered: Vec<SoldTicket> = view.filter.apply(&records).into_iter().cloned().collect();

    let csv = sold_tickets_report(&filtered).map_err(|e| AppError::internal(e.to_string()))?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sold_tickets.csv\"",
            ),
        ],
        csv,
    ))
}
