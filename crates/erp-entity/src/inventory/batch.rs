//! Batch kind discriminator for polymorphic inventory rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator tag for the two batch shapes an inventory row can hold.
///
/// Product rows link through product/SKU/product-batch tables; packaging
/// material rows link to a material batch directly. Filter builders branch
/// on this tag so batch-specific columns (lot number, expiry) are tested
/// against the correct table per shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "batch_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BatchKind {
    /// A finished-product batch.
    Product,
    /// A packaging-material batch.
    PackagingMaterial,
}

impl BatchKind {
    /// Return the tag as stored in the `batch_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::PackagingMaterial => "packaging_material",
        }
    }
}

impl fmt::Display for BatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
