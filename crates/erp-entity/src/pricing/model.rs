//! Price list entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// Which commercial channel a price list entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "price_list_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PriceListType {
    /// Direct-to-consumer pricing.
    Retail,
    /// Bulk pricing for wholesale accounts.
    Wholesale,
    /// Time-boxed promotional pricing.
    Promotional,
}

impl PriceListType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retail => "retail",
            Self::Wholesale => "wholesale",
            Self::Promotional => "promotional",
        }
    }
}

impl fmt::Display for PriceListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A price list entry for one SKU, joined with its product for display.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PriceListEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// The SKU this price applies to.
    pub sku_id: Uuid,
    /// SKU code (joined from `skus`).
    pub sku_code: String,
    /// Product display name (joined from `products`).
    pub product_name: String,
    /// Product brand (joined from `products`).
    pub brand: String,
    /// Commercial channel.
    pub list_type: PriceListType,
    /// Unit price in cents.
    pub unit_price_cents: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Start of the validity window.
    pub valid_from: DateTime<Utc>,
    /// End of the validity window; `None` means open-ended.
    pub valid_to: Option<DateTime<Utc>>,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last updated.
    pub updated_at: DateTime<Utc>,
}
