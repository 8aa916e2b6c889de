//! Fulfillment list filter criteria.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::status::FulfillmentStatus;

/// Optional filter criteria for fulfillment order list queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FulfillmentFilter {
    /// Free-text search over order number and tracking number.
    pub keyword: Option<String>,
    /// Restrict to any of these statuses.
    pub statuses: Option<Vec<FulfillmentStatus>>,
    /// The ordering customer.
    pub customer_id: Option<Uuid>,
    /// The fulfilling warehouse.
    pub warehouse_id: Option<Uuid>,
    /// Shipping carrier (exact match).
    pub carrier: Option<String>,
    /// Shipped on or after this calendar day (UTC).
    pub shipped_after: Option<NaiveDate>,
    /// Shipped through the end of this calendar day (UTC).
    pub shipped_before: Option<NaiveDate>,
    /// Created on or after this calendar day (UTC).
    pub created_after: Option<NaiveDate>,
    /// Created through the end of this calendar day (UTC).
    pub created_before: Option<NaiveDate>,
}
