//! Ticket Order Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::status::OrderStatus;

pub type SoldTicketId = RecordId;

/// Ticket order as stored in the `soldtickets` collection
///
/// `quantity` and `event_date` are optional: older documents omit them and
/// the month bucketing silently skips such records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoldTicket {
    pub id: Option<SoldTicketId>,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub quantity: Option<u32>,
    pub purchase_date: Option<NaiveDate>,
    pub event_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: OrderStatus,
    pub receipt_url: Option<String>,
}
