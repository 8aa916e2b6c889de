//! Inventory list filter criteria.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::batch::BatchKind;

/// Optional user-supplied filter criteria for inventory list queries.
///
/// Shared by the location and warehouse variants; `location_ids` applies
/// only to the former and `warehouse_ids` only to the latter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryFilter {
    /// Free-text search over SKU code, product name, and material name.
    pub keyword: Option<String>,
    /// Restrict to one batch shape.
    pub batch_kind: Option<BatchKind>,
    /// Restrict to any of these SKUs (product rows only match).
    pub sku_ids: Option<Vec<Uuid>>,
    /// Lot number search, applied to whichever batch shape each row holds.
    pub lot_number: Option<String>,
    /// Batch expires on or after this calendar day (UTC).
    pub expires_after: Option<NaiveDate>,
    /// Batch expires before the end of this calendar day (UTC).
    pub expires_before: Option<NaiveDate>,
    /// Drop rows with neither stock on hand nor reservations.
    #[serde(default)]
    pub exclude_empty: bool,
    /// Restrict to any of these storage locations.
    pub location_ids: Option<Vec<Uuid>>,
    /// Restrict to any of these warehouses.
    pub warehouse_ids: Option<Vec<Uuid>>,
}

/// System-enforced visibility constraints for inventory queries.
///
/// These are set by the service layer, never by end users, and are kept
/// apart from [`InventoryFilter`] so caller-supplied input can never widen
/// visibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryVisibility {
    /// When set, product rows must carry a batch in this status; material
    /// rows are unaffected.
    pub active_status_id: Option<Uuid>,
}
