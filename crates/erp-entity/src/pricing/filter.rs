//! Price list filter criteria.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::PriceListType;

/// Optional filter criteria for price list queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingFilter {
    /// Product brand (exact match).
    pub brand: Option<String>,
    /// Commercial channel.
    pub list_type: Option<PriceListType>,
    /// Restrict to any of these SKUs.
    pub sku_ids: Option<Vec<Uuid>>,
    /// Lower bound on unit price, in cents (inclusive).
    pub min_unit_price_cents: Option<i64>,
    /// Upper bound on unit price, in cents (inclusive).
    pub max_unit_price_cents: Option<i64>,
    /// Only entries whose validity window contains the database's
    /// current time.
    #[serde(default)]
    pub currently_valid: bool,
    /// Created on or after this calendar day (UTC).
    pub created_after: Option<NaiveDate>,
    /// Created through the end of this calendar day (UTC).
    pub created_before: Option<NaiveDate>,
}
