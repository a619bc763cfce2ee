//! Aggregation & Filter Engine
//!
//! Pure functions over in-memory record lists: chart series derivation,
//! AND-combined table filtering, pagination, the immutable table view
//! state, and the CSV report adapter. No I/O happens in this module.

pub mod charts;
pub mod export;
pub mod filter;
pub mod view;

pub use charts::{ItemSales, MonthTickets, bucket_sales_by_item, bucket_tickets_by_month};
pub use export::{ExportError, sold_items_report, sold_tickets_report};
pub use filter::{DateRange, TableFilter, TableRow, filter_by_date_range, page_count, paginate};
pub use view::{PageSelection, TableView};
