//! Fulfillment status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a fulfillment order as it moves through the warehouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "fulfillment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentStatus {
    /// Accepted, awaiting stock allocation.
    Pending,
    /// Stock reserved against inventory.
    Allocated,
    /// Being picked on the warehouse floor.
    Picking,
    /// Packed and awaiting carrier pickup.
    Packed,
    /// Handed to the carrier.
    Shipped,
    /// Confirmed delivered.
    Delivered,
    /// Cancelled before shipment.
    Cancelled,
}

impl FulfillmentStatus {
    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Allocated => "allocated",
            Self::Picking => "picking",
            Self::Packed => "packed",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(FulfillmentStatus::Delivered.is_terminal());
        assert!(FulfillmentStatus::Cancelled.is_terminal());
        assert!(!FulfillmentStatus::Shipped.is_terminal());
        assert!(!FulfillmentStatus::Pending.is_terminal());
    }
}
