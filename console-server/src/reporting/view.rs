//! Immutable table view state
//!
//! The current filter and page live in one value; every transition returns a
//! new state instead of mutating shared fields. Changing a filter resets the
//! page, since the old page number refers to a different result set.

use serde::Serialize;

use crate::db::models::OrderStatus;

use super::filter::{DateRange, TableFilter, TableRow, page_count, paginate};

/// One selected page of a filtered table
#[derive(Debug, Serialize)]
pub struct PageSelection<'a, R> {
    pub items: Vec<&'a R>,
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
}

/// View state for an order table
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub filter: TableFilter,
    pub page: usize,
    pub page_size: usize,
}

impl TableView {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: TableFilter::default(),
            page: 1,
            page_size,
        }
    }

    pub fn with_status(self, status: Option<OrderStatus>) -> Self {
        Self {
            filter: TableFilter { status, ..self.filter },
            page: 1,
            ..self
        }
    }

    pub fn with_search(self, search: Option<String>) -> Self {
        Self {
            filter: TableFilter { search, ..self.filter },
            page: 1,
            ..self
        }
    }

    pub fn with_dates(self, dates: DateRange) -> Self {
        Self {
            filter: TableFilter { dates, ..self.filter },
            page: 1,
            ..self
        }
    }

    pub fn with_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    /// Apply the filter and slice out the current page.
    ///
    /// The requested page is clamped to the filtered result, so a stale page
    /// number still yields content.
    pub fn select<'a, R: TableRow>(&self, rows: &'a [R]) -> PageSelection<'a, R> {
        let filtered = self.filter.apply(rows);
        let total_rows = filtered.len();
        let total_pages = page_count(total_rows, self.page_size);
        let page = self.page.clamp(1, total_pages);
        let items = paginate(&filtered, self.page_size, page).to_vec();
        PageSelection {
            items,
            page,
            total_pages,
            total_rows,
        }
    }
}
