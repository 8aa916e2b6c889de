//! Customer entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// Commercial classification of a customer account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "customer_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    /// Direct-to-consumer account.
    Retail,
    /// Bulk-purchasing business account.
    Wholesale,
    /// Regional distribution partner.
    Distributor,
}

impl CustomerType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Retail => "retail",
            Self::Wholesale => "wholesale",
            Self::Distributor => "distributor",
        }
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    /// Unique customer identifier.
    pub id: Uuid,
    /// Company or contact name.
    pub name: String,
    /// Primary contact email.
    pub email: Option<String>,
    /// Primary contact phone number.
    pub phone: Option<String>,
    /// Sales region code.
    pub region: Option<String>,
    /// Commercial classification.
    pub customer_type: CustomerType,
    /// Whether the account can place orders.
    pub is_active: bool,
    /// Assigned sales representative.
    pub sales_rep_id: Option<Uuid>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}
