//! Event Model
//!
//! Read-only in the console; used for the "recent events" display.

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type EventId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<EventId>,
    pub name: String,
    pub year: i32,
    #[serde(default)]
    pub description: String,
}
