//! Inventory entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::batch::BatchKind;

/// An inventory row at a specific storage location.
///
/// Columns from both batch shapes are projected side by side; accessors
/// select the branch that matches [`Self::batch_type`]. Columns belonging
/// to the other shape are null.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LocationInventory {
    /// Unique inventory row identifier.
    pub id: Uuid,
    /// The storage location (bin/shelf) holding this stock.
    pub location_id: Uuid,
    /// Which batch shape this row holds.
    pub batch_type: BatchKind,
    /// Product batch id (product rows).
    pub product_batch_id: Option<Uuid>,
    /// Packaging-material batch id (material rows).
    pub material_batch_id: Option<Uuid>,
    /// SKU code (product rows).
    pub sku_code: Option<String>,
    /// Product display name (product rows).
    pub product_name: Option<String>,
    /// Material display name (material rows).
    pub material_name: Option<String>,
    /// Lot number of the product batch.
    pub product_lot_number: Option<String>,
    /// Lot number of the material batch.
    pub material_lot_number: Option<String>,
    /// Expiry of the product batch.
    pub product_expires_at: Option<DateTime<Utc>>,
    /// Expiry of the material batch.
    pub material_expires_at: Option<DateTime<Utc>>,
    /// Units physically present.
    pub quantity_on_hand: i64,
    /// Units reserved against open orders.
    pub quantity_reserved: i64,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl LocationInventory {
    /// The lot number of whichever batch this row holds.
    pub fn lot_number(&self) -> Option<&str> {
        match self.batch_type {
            BatchKind::Product => self.product_lot_number.as_deref(),
            BatchKind::PackagingMaterial => self.material_lot_number.as_deref(),
        }
    }

    /// The expiry of whichever batch this row holds.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self.batch_type {
            BatchKind::Product => self.product_expires_at,
            BatchKind::PackagingMaterial => self.material_expires_at,
        }
    }

    /// Whether the row carries no stock at all.
    pub fn is_empty(&self) -> bool {
        self.quantity_on_hand <= 0 && self.quantity_reserved <= 0
    }
}

/// An inventory row aggregated at warehouse level.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WarehouseInventory {
    /// Unique inventory row identifier.
    pub id: Uuid,
    /// The warehouse holding this stock.
    pub warehouse_id: Uuid,
    /// Which batch shape this row holds.
    pub batch_type: BatchKind,
    /// Product batch id (product rows).
    pub product_batch_id: Option<Uuid>,
    /// Packaging-material batch id (material rows).
    pub material_batch_id: Option<Uuid>,
    /// SKU code (product rows).
    pub sku_code: Option<String>,
    /// Product display name (product rows).
    pub product_name: Option<String>,
    /// Material display name (material rows).
    pub material_name: Option<String>,
    /// Lot number of the product batch.
    pub product_lot_number: Option<String>,
    /// Lot number of the material batch.
    pub material_lot_number: Option<String>,
    /// Expiry of the product batch.
    pub product_expires_at: Option<DateTime<Utc>>,
    /// Expiry of the material batch.
    pub material_expires_at: Option<DateTime<Utc>>,
    /// Units physically present.
    pub quantity_on_hand: i64,
    /// Units reserved against open orders.
    pub quantity_reserved: i64,
    /// When the row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl WarehouseInventory {
    /// The lot number of whichever batch this row holds.
    pub fn lot_number(&self) -> Option<&str> {
        match self.batch_type {
            BatchKind::Product => self.product_lot_number.as_deref(),
            BatchKind::PackagingMaterial => self.material_lot_number.as_deref(),
        }
    }

    /// The expiry of whichever batch this row holds.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        match self.batch_type {
            BatchKind::Product => self.product_expires_at,
            BatchKind::PackagingMaterial => self.material_expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material_row() -> LocationInventory {
        LocationInventory {
            id: Uuid::from_u128(1),
            location_id: Uuid::from_u128(2),
            batch_type: BatchKind::PackagingMaterial,
            product_batch_id: None,
            material_batch_id: Some(Uuid::from_u128(3)),
            sku_code: None,
            product_name: None,
            material_name: Some("250ml amber bottle".to_string()),
            product_lot_number: None,
            material_lot_number: Some("ML-2209".to_string()),
            product_expires_at: None,
            material_expires_at: None,
            quantity_on_hand: 480,
            quantity_reserved: 24,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_accessors_follow_the_batch_tag() {
        let row = material_row();
        assert_eq!(row.lot_number(), Some("ML-2209"));
        assert_eq!(row.expires_at(), None);

        let mut product_row = material_row();
        product_row.batch_type = BatchKind::Product;
        product_row.product_lot_number = Some("PB-77".to_string());
        // The material lot is still populated but must not leak through.
        assert_eq!(product_row.lot_number(), Some("PB-77"));
    }

    #[test]
    fn test_is_empty_requires_no_stock_and_no_reservations() {
        let mut row = material_row();
        assert!(!row.is_empty());
        row.quantity_on_hand = 0;
        assert!(!row.is_empty());
        row.quantity_reserved = 0;
        assert!(row.is_empty());
    }
}
