//! Discount list filter criteria.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::model::{DiscountStatus, DiscountType};

/// Optional filter criteria for discount list queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiscountFilter {
    /// Free-text search over code and description.
    pub keyword: Option<String>,
    /// How the discount reduces the order value.
    pub discount_type: Option<DiscountType>,
    /// Lifecycle status.
    pub status: Option<DiscountStatus>,
    /// Only discounts whose validity window contains the database's
    /// current time.
    #[serde(default)]
    pub currently_valid: bool,
    /// Only discounts applicable to an order of this subtotal (cents);
    /// matches discounts with no minimum or a minimum at or below it.
    pub applicable_to_order_cents: Option<i64>,
    /// Created on or after this calendar day (UTC).
    pub created_after: Option<NaiveDate>,
    /// Created through the end of this calendar day (UTC).
    pub created_before: Option<NaiveDate>,
}
