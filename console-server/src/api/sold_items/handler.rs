//! Merchandise order API Handlers
//!
//! Every list request refreshes the workflow snapshot from the store, then
//! filters and pages in memory. Status changes go through the staged
//! transition flow; nothing commits without an explicit confirm.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::api::{OrderTableQuery, TablePage};
use crate::core::ServerState;
use crate::db::models::{OrderStatus, SoldItem};
use crate::reporting::sold_items_report;
use crate::utils::{AppError, AppResult};
use crate::workflow::StagedTransition;

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub target: OrderStatus,
}

/// GET /api/sold-items - refresh the snapshot, filter and page it
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderTableQuery>,
) -> AppResult<Json<TablePage<SoldItem>>> {
    let view = query.into_view(state.config.page_size)?;
    let records = state.sold_item_repo().find_all().await.map_err(AppError::fetch)?;

    let mut engine = state.sold_items.lock().await;
    engine.load(records);

    let selection = view.select(engine.records());
    Ok(Json(TablePage {
        page: selection.page,
        total_pages: selection.total_pages,
        total_rows: selection.total_rows,
        items: selection.items.into_iter().cloned().collect(),
    }))
}

/// POST /api/sold-items/{id}/transition - stage a status change
pub async fn request_transition(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(request): Json<TransitionRequest>,
) -> AppResult<Json<StagedTransition>> {
    let mut engine = state.sold_items.lock().await;
    engine.request_transition(&id, request.target)?;
    let staged = engine
        .staged()
        .cloned()
        .ok_or_else(|| AppError::internal("Staged transition missing after request"))?;
    Ok(Json(staged))
}

/// POST /api/sold-items/transition/confirm - commit the staged change
pub async fn confirm_transition(
    State(state): State<ServerState>,
) -> AppResult<Json<SoldItem>> {
    let repo = state.sold_item_repo();
    let mut engine = state.sold_items.lock().await;
    let updated = engine.confirm_transition(&repo).await?.clone();
    tracing::info!(id = %updated.transaction_id, status = %updated.status, "Order status updated");
    Ok(Json(updated))
}

/// POST /api/sold-items/transition/cancel - discard the staged change
pub async fn cancel_transition(State(state): State<ServerState>) -> AppResult<Json<serde_json::Value>> {
    let mut engine = state.sold_items.lock().await;
    engine.cancel_transition();
    Ok(Json(serde_json::json!({ "cancelled": true })))
}

/// DELETE /api/sold-items/{id} - delete a Declined record
pub async fn delete_record(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<SoldItem>> {
    let repo = state.sold_item_repo();
    let mut engine = state.sold_items.lock().await;
    let removed = engine.delete_record(&repo, &id).await?;
    tracing::info!(id = %removed.transaction_id, "Order deleted");
    Ok(Json(removed))
}

/// GET /api/sold-items/export - CSV over the current filters, all pages
pub async fn export(
    State(state): State<ServerState>,
    Query(query): Query<OrderTableQuery>,
) -> AppResult<impl IntoResponse> {
    let view = query.into_view(state.config.page_size)?;
    let records = state.sold_item_repo().find_all().await.map_err(AppError::fetch)?;
    let filtered: Vec<SoldItem> = view.filter.apply(&records).into_iter().cloned().collect();

    let csv = sold_items_report(&filtered).map_err(|e| AppError::internal(e.to_string()))?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sold_items.csv\"",
            ),
        ],
        csv,
    ))
}
