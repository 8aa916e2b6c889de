//! Discount filter construction.
//!
//! Alias: `d` = `discounts`.

use erp_core::AppResult;
use erp_entity::discount::DiscountFilter;

use super::require_keyword;
use crate::conditions::{ConditionSet, WhereClause};
use crate::date_range::DateRange;

const DOMAIN: &str = "discount";

/// Columns searched by the discount keyword filter.
const KEYWORD_COLUMNS: &[&str] = &["d.code", "d.description"];

/// Allow-listed sort columns for discount list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiscountSortKey {
    Code,
    ValidFrom,
    #[default]
    CreatedAt,
}

impl DiscountSortKey {
    /// The alias-qualified column interpolated into `ORDER BY`.
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Code => "d.code",
            Self::ValidFrom => "d.valid_from",
            Self::CreatedAt => "d.created_at",
        }
    }

    /// Parse a user-supplied sort field name.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "code" => Some(Self::Code),
            "valid_from" => Some(Self::ValidFrom),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

/// Build the `WHERE` predicate for a discount list query.
///
/// `currently_valid` compares against the database's `NOW()` rather than an
/// app-supplied timestamp, so validity never depends on clock skew between
/// the application host and the database.
pub fn build_discount_filter(filter: &DiscountFilter) -> AppResult<WhereClause> {
    let mut set = ConditionSet::new();

    if let Some(keyword) = filter.keyword.as_deref() {
        require_keyword(DOMAIN, keyword)?;
        set.push_keyword(KEYWORD_COLUMNS, keyword);
    }
    if let Some(discount_type) = filter.discount_type {
        set.push_enum_eq("d.discount_type", "discount_type", discount_type);
    }
    if let Some(status) = filter.status {
        set.push_enum_eq("d.status", "discount_status", status);
    }
    if filter.currently_valid {
        set.push("d.valid_from <= NOW()");
        set.push("(d.valid_to IS NULL OR d.valid_to >= NOW())");
    }
    if let Some(order_cents) = filter.applicable_to_order_cents {
        let n = set.bind(order_cents);
        set.push(format!(
            "(d.min_order_cents IS NULL OR d.min_order_cents <= ${n})"
        ));
    }
    set.push_date_range(
        "d.created_at",
        &DateRange::from_bounds(filter.created_after, filter.created_before),
    );

    Ok(set.into_where_clause())
}
