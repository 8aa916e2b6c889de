//! Discount entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// How a discount reduces the order value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "discount_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// A percentage off the order subtotal.
    Percentage,
    /// A fixed amount off the order subtotal.
    FixedAmount,
    /// Buy a quantity, get a quantity free.
    BuyXGetY,
}

impl DiscountType {
    /// Return the type as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::FixedAmount => "fixed_amount",
            Self::BuyXGetY => "buy_x_get_y",
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "discount_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DiscountStatus {
    /// Being drafted; not yet applicable to orders.
    Draft,
    /// Live and applicable within its validity window.
    Active,
    /// Retired; kept for order history.
    Archived,
}

impl DiscountStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for DiscountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A promotional discount.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Discount {
    /// Unique discount identifier.
    pub id: Uuid,
    /// Redemption code (e.g. `SPRING25`).
    pub code: String,
    /// Free-form description.
    pub description: Option<String>,
    /// How the discount reduces the order value.
    pub discount_type: DiscountType,
    /// Lifecycle status.
    pub status: DiscountStatus,
    /// Percentage off (for percentage discounts).
    pub percent_off: Option<i32>,
    /// Fixed amount off in cents (for fixed-amount discounts).
    pub amount_off_cents: Option<i64>,
    /// Minimum order subtotal in cents for the discount to apply.
    pub min_order_cents: Option<i64>,
    /// Start of the validity window.
    pub valid_from: DateTime<Utc>,
    /// End of the validity window; `None` means open-ended.
    pub valid_to: Option<DateTime<Utc>>,
    /// When the discount was created.
    pub created_at: DateTime<Utc>,
    /// When the discount was last updated.
    pub updated_at: DateTime<Utc>,
}
