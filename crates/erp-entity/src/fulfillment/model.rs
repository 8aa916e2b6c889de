//! Fulfillment order entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::FulfillmentStatus;

/// An order being fulfilled out of a warehouse.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FulfillmentOrder {
    /// Unique order identifier.
    pub id: Uuid,
    /// Human-readable order number (e.g. `FO-104992`).
    pub order_number: String,
    /// The ordering customer.
    pub customer_id: Uuid,
    /// The warehouse fulfilling the order.
    pub warehouse_id: Uuid,
    /// Current fulfillment status.
    pub status: FulfillmentStatus,
    /// Shipping carrier, once assigned.
    pub carrier: Option<String>,
    /// Carrier tracking number, once shipped.
    pub tracking_number: Option<String>,
    /// When the order left the warehouse.
    pub shipped_at: Option<DateTime<Utc>>,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}
