//! Order status lifecycle shared by merchandise and ticket orders

use serde::{Deserialize, Serialize};
use std::fmt;

/// Admin-driven order status
///
/// Any status may transition to any other (admin override). Declined is not
/// terminal; it is the only status from which a record may be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Approved,
    Declined,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Approved => "Approved",
            OrderStatus::Declined => "Declined",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Approved" => Ok(OrderStatus::Approved),
            "Declined" => Ok(OrderStatus::Declined),
            other => Err(format!("Unknown order status: {}", other)),
        }
    }
}
