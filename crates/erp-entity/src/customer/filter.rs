//! Customer list filter criteria.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::CustomerType;

/// Optional filter criteria for customer list queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerFilter {
    /// Free-text search over name, email, and phone.
    pub keyword: Option<String>,
    /// Sales region code.
    pub region: Option<String>,
    /// Commercial classification.
    pub customer_type: Option<CustomerType>,
    /// Account active flag.
    pub is_active: Option<bool>,
    /// Restrict to accounts assigned to any of these sales reps.
    pub sales_rep_ids: Option<Vec<Uuid>>,
    /// Created on or after this calendar day (UTC).
    pub created_after: Option<NaiveDate>,
    /// Created through the end of this calendar day (UTC).
    pub created_before: Option<NaiveDate>,
}
