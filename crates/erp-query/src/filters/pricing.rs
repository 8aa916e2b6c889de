//! Price list filter construction.
//!
//! Aliases: `p` = `price_list_entries`, `pr` = `products`, `s` = `skus`.

use erp_core::AppResult;
use erp_entity::pricing::PricingFilter;

use super::require_non_empty;
use crate::conditions::{ConditionSet, WhereClause};
use crate::date_range::DateRange;

const DOMAIN: &str = "pricing";

/// Allow-listed sort columns for price list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PricingSortKey {
    Brand,
    UnitPrice,
    ValidFrom,
    #[default]
    CreatedAt,
}

impl PricingSortKey {
    /// The alias-qualified column interpolated into `ORDER BY`.
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Brand => "pr.brand",
            Self::UnitPrice => "p.unit_price_cents",
            Self::ValidFrom => "p.valid_from",
            Self::CreatedAt => "p.created_at",
        }
    }

    /// Parse a user-supplied sort field name.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "brand" => Some(Self::Brand),
            "unit_price" => Some(Self::UnitPrice),
            "valid_from" => Some(Self::ValidFrom),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

/// Build the `WHERE` predicate for a price list query.
///
/// `currently_valid` compares against the database's `NOW()` rather than an
/// app-supplied timestamp.
pub fn build_pricing_filter(filter: &PricingFilter) -> AppResult<WhereClause> {
    let mut set = ConditionSet::new();

    if let Some(brand) = &filter.brand {
        set.push_eq("pr.brand", brand.clone());
    }
    if let Some(list_type) = filter.list_type {
        set.push_enum_eq("p.list_type", "price_list_type", list_type);
    }
    if let Some(ids) = &filter.sku_ids {
        require_non_empty(DOMAIN, "sku_ids", ids)?;
        set.push_any("p.sku_id", ids.clone());
    }
    if let Some(min) = filter.min_unit_price_cents {
        set.push_cmp("p.unit_price_cents", ">=", min);
    }
    if let Some(max) = filter.max_unit_price_cents {
        set.push_cmp("p.unit_price_cents", "<=", max);
    }
    if filter.currently_valid {
        set.push("p.valid_from <= NOW()");
        set.push("(p.valid_to IS NULL OR p.valid_to >= NOW())");
    }
    set.push_date_range(
        "p.created_at",
        &DateRange::from_bounds(filter.created_after, filter.created_before),
    );

    Ok(set.into_where_clause())
}
