//! BOM list filter criteria.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional filter criteria for BOM list queries.
///
/// `None` fields are not filtered on; `Some(false)` on a boolean still
/// produces a condition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BomFilter {
    /// Free-text search over BOM name, code, and description.
    pub keyword: Option<String>,
    /// Restrict to BOMs producing any of these products.
    pub product_ids: Option<Vec<Uuid>>,
    /// Restrict to BOMs consuming any of these component SKUs.
    pub component_sku_ids: Option<Vec<Uuid>>,
    /// Active-revision flag.
    pub is_active: Option<bool>,
    /// Created on or after this calendar day (UTC).
    pub created_after: Option<NaiveDate>,
    /// Created through the end of this calendar day (UTC).
    pub created_before: Option<NaiveDate>,
}
