//! Customer filter construction.
//!
//! Alias: `c` = `customers`.

use erp_core::AppResult;
use erp_entity::customer::CustomerFilter;

use super::{require_keyword, require_non_empty};
use crate::conditions::{ConditionSet, WhereClause};
use crate::date_range::DateRange;

const DOMAIN: &str = "customer";

/// Columns searched by the customer keyword filter.
const KEYWORD_COLUMNS: &[&str] = &["c.name", "c.email", "c.phone"];

/// Allow-listed sort columns for customer list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CustomerSortKey {
    Name,
    Region,
    #[default]
    CreatedAt,
}

impl CustomerSortKey {
    /// The alias-qualified column interpolated into `ORDER BY`.
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Name => "c.name",
            Self::Region => "c.region",
            Self::CreatedAt => "c.created_at",
        }
    }

    /// Parse a user-supplied sort field name.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "name" => Some(Self::Name),
            "region" => Some(Self::Region),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

/// Build the `WHERE` predicate for a customer list query.
pub fn build_customer_filter(filter: &CustomerFilter) -> AppResult<WhereClause> {
    let mut set = ConditionSet::new();

    if let Some(keyword) = filter.keyword.as_deref() {
        require_keyword(DOMAIN, keyword)?;
        set.push_keyword(KEYWORD_COLUMNS, keyword);
    }
    if let Some(region) = &filter.region {
        set.push_eq("c.region", region.clone());
    }
    if let Some(customer_type) = filter.customer_type {
        set.push_enum_eq("c.customer_type", "customer_type", customer_type);
    }
    if let Some(is_active) = filter.is_active {
        set.push_eq("c.is_active", is_active);
    }
    if let Some(ids) = &filter.sales_rep_ids {
        require_non_empty(DOMAIN, "sales_rep_ids", ids)?;
        set.push_any("c.sales_rep_id", ids.clone());
    }
    set.push_date_range(
        "c.created_at",
        &DateRange::from_bounds(filter.created_after, filter.created_before),
    );

    Ok(set.into_where_clause())
}
