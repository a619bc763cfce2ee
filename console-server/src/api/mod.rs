//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`products`] - product catalog management
//! - [`events`] - event listing
//! - [`sold_items`] - merchandise order table and workflow
//! - [`sold_tickets`] - ticket order table and workflow
//! - [`dashboard`] - aggregated chart and listing data

pub mod dashboard;
pub mod events;
pub mod health;
pub mod products;
pub mod sold_items;
pub mod sold_tickets;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::models::OrderStatus;
use crate::reporting::{DateRange, TableView};
use crate::utils::{AppError, AppResult};

/// Query string shared by the order table endpoints
#[derive(Debug, Default, Deserialize)]
pub struct OrderTableQuery {
    pub status: Option<String>,
    pub search: Option<String>,
    /// Inclusive range start, ISO date
    pub start: Option<NaiveDate>,
    /// Inclusive range end, ISO date
    pub end: Option<NaiveDate>,
    pub page: Option<usize>,
}

impl OrderTableQuery {
    /// Build the view state for this request.
    ///
    /// An unknown status value is a validation error rather than a silent
    /// no-filter.
    pub fn into_view(self, page_size: usize) -> AppResult<TableView> {
        let status = match self.status.as_deref() {
            None | Some("") | Some("All") => None,
            Some(raw) => Some(
                raw.parse::<OrderStatus>()
                    .map_err(|_| AppError::validation(format!("Unknown status: {}", raw)))?,
            ),
        };

        let view = TableView::new(page_size)
            .with_status(status)
            .with_search(self.search.filter(|s| !s.trim().is_empty()))
            .with_dates(DateRange::new(self.start, self.end))
            .with_page(self.page.unwrap_or(1));
        Ok(view)
    }
}

/// One page of an order table, in response form
#[derive(Debug, Serialize)]
pub struct TablePage<R> {
    pub items: Vec<R>,
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
}
