//! Bill-of-materials entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A manufacturing bill of materials.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BillOfMaterials {
    /// Unique BOM identifier.
    pub id: Uuid,
    /// Human-readable BOM code (e.g. `BOM-2031`).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// The finished product this BOM produces.
    pub product_id: Uuid,
    /// Units of finished product produced per run.
    pub output_quantity: i32,
    /// Whether this BOM revision is active for manufacturing.
    pub is_active: bool,
    /// When the BOM was created.
    pub created_at: DateTime<Utc>,
    /// When the BOM was last updated.
    pub updated_at: DateTime<Utc>,
}
