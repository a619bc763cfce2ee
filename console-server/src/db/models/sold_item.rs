//! Merchandise Order Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::status::OrderStatus;

pub type SoldItemId = RecordId;

/// One line of a merchandise order's cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub name: String,
    pub size: String,
    pub quantity: u32,
}

/// Merchandise order as stored in the `solditems` collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoldItem {
    pub id: Option<SoldItemId>,
    pub transaction_id: String,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub shipping_address: String,
    pub payment_method: String,
    pub total_amount: Decimal,
    pub order_date: Option<NaiveDate>,
    #[serde(default)]
    pub cart_items: Vec<CartLine>,
    /// Missing in documents written before the workflow existed
    #[serde(default)]
    pub status: OrderStatus,
    pub receipt_url: Option<String>,
}
