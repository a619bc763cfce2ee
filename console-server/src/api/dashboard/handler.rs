//! Dashboard API Handlers
//!
//! One aggregate endpoint feeding the landing view: recent products within
//! the selected range, chart series for merch sales and monthly tickets,
//! and the newest events.

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Event, Product};
use crate::reporting::{ItemSales, MonthTickets, bucket_sales_by_item, bucket_tickets_by_month};
use crate::utils::{AppError, AppResult};

const RECENT_EVENT_LIMIT: usize = 3;

/// Product listing window on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeKind {
    Week,
    Month,
    Year,
}

impl RangeKind {
    /// Inclusive range start counted back from `now`
    fn start_from(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            RangeKind::Week => now - Duration::days(7),
            RangeKind::Month => now
                .checked_sub_months(Months::new(1))
                .unwrap_or(now - Duration::days(30)),
            RangeKind::Year => now
                .checked_sub_months(Months::new(12))
                .unwrap_or(now - Duration::days(365)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub range: Option<RangeKind>,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub products: Vec<Product>,
    pub item_sales: Vec<ItemSales>,
    pub monthly_tickets: Vec<MonthTickets>,
    pub recent_events: Vec<Event>,
}

/// GET /api/dashboard?range=week|month|year
pub async fn dashboard(
    State(state): State<ServerState>,
    Query(query): Query<DashboardQuery>,
) -> AppResult<Json<DashboardResponse>> {
    let range = query.range.unwrap_or(RangeKind::Week);
    let now = Utc::now();
    let start = range.start_from(now);

    let products = state
        .products()
        .find_created_between(start, now)
        .await
        .map_err(AppError::fetch)?;

    let orders = state
        .sold_item_repo()
        .find_all()
        .await
        .map_err(AppError::fetch)?;
    let tickets = state
        .sold_ticket_repo()
        .find_all()
        .await
        .map_err(AppError::fetch)?;
    let recent_events = state
        .events()
        .find_recent(RECENT_EVENT_LIMIT)
        .await
        .map_err(AppError::fetch)?;

    Ok(Json(DashboardResponse {
        products,
        item_sales: bucket_sales_by_item(&orders),
        monthly_tickets: bucket_tickets_by_month(&tickets),
        recent_events,
    }))
}
