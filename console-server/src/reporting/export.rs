//! Report export adapter
//!
//! Maps order rows to named CSV columns for download. Spreadsheet rendering
//! and printing stay with the host; this layer only flattens records.

use thiserror::Error;

use crate::db::models::{SoldItem, SoldTicket};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(String),
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::Csv(err.to_string())
    }
}

const SOLD_ITEM_COLUMNS: [&str; 10] = [
    "Transaction ID",
    "Buyer Name",
    "Email",
    "Phone",
    "Shipping Address",
    "Payment Method",
    "Total Amount",
    "Order Date",
    "Status",
    "Items Purchased",
];

const SOLD_TICKET_COLUMNS: [&str; 8] = [
    "Buyer Name",
    "Email",
    "Phone",
    "Quantity",
    "Purchase Date",
    "Event Date",
    "Status",
    "Receipt",
];

fn date_cell(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

/// Render merchandise orders as a CSV document
pub fn sold_items_report(items: &[SoldItem]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(SOLD_ITEM_COLUMNS)?;

    for item in items {
        let purchased = item
            .cart_items
            .iter()
            .map(|line| format!("{} (Size: {}, Qty: {})", line.name, line.size, line.quantity))
            .collect::<Vec<_>>()
            .join(", ");

        writer.write_record([
            item.transaction_id.as_str(),
            item.customer_name.as_str(),
            item.email.as_str(),
            item.phone.as_str(),
            item.shipping_address.as_str(),
            item.payment_method.as_str(),
            &item.total_amount.to_string(),
            &date_cell(item.order_date),
            item.status.as_str(),
            &purchased,
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))
}

/// Render ticket orders as a CSV document
pub fn sold_tickets_report(tickets: &[SoldTicket]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(SOLD_TICKET_COLUMNS)?;

    for ticket in tickets {
        let quantity = ticket.quantity.map(|q| q.to_string()).unwrap_or_default();
        writer.write_record([
            ticket.full_name.as_str(),
            ticket.email.as_str(),
            ticket.phone.as_str(),
            &quantity,
            &date_cell(ticket.purchase_date),
            &date_cell(ticket.event_date),
            ticket.status.as_str(),
            ticket.receipt_url.as_deref().unwrap_or(""),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))
}
