//! Bill-of-materials filter construction.
//!
//! Alias: `b` = `boms`.

use erp_core::AppResult;
use erp_entity::bom::BomFilter;

use super::{require_keyword, require_non_empty};
use crate::conditions::{ConditionSet, WhereClause};
use crate::date_range::DateRange;

const DOMAIN: &str = "bom";

/// Columns searched by the BOM keyword filter.
const KEYWORD_COLUMNS: &[&str] = &["b.name", "b.code", "b.description"];

/// Allow-listed sort columns for BOM list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BomSortKey {
    Name,
    Code,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl BomSortKey {
    /// The alias-qualified column interpolated into `ORDER BY`.
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::Name => "b.name",
            Self::Code => "b.code",
            Self::CreatedAt => "b.created_at",
            Self::UpdatedAt => "b.updated_at",
        }
    }

    /// Parse a user-supplied sort field name.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "name" => Some(Self::Name),
            "code" => Some(Self::Code),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }
}

/// Build the `WHERE` predicate for a BOM list query.
pub fn build_bom_filter(filter: &BomFilter) -> AppResult<WhereClause> {
    let mut set = ConditionSet::new();

    if let Some(keyword) = filter.keyword.as_deref() {
        require_keyword(DOMAIN, keyword)?;
        set.push_keyword(KEYWORD_COLUMNS, keyword);
    }
    if let Some(ids) = &filter.product_ids {
        require_non_empty(DOMAIN, "product_ids", ids)?;
        set.push_any("b.product_id", ids.clone());
    }
    if let Some(ids) = &filter.component_sku_ids {
        require_non_empty(DOMAIN, "component_sku_ids", ids)?;
        let n = set.bind(ids.clone());
        set.push(format!(
            "b.id IN (SELECT bc.bom_id FROM bom_components bc WHERE bc.sku_id = ANY(${n}))"
        ));
    }
    if let Some(is_active) = filter.is_active {
        set.push_eq("b.is_active", is_active);
    }
    set.push_date_range(
        "b.created_at",
        &DateRange::from_bounds(filter.created_after, filter.created_before),
    );

    Ok(set.into_where_clause())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::test_support::assert_placeholders_aligned;
    use crate::value::BindValue;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_empty_filter_is_neutral() {
        let filter = build_bom_filter(&BomFilter::default()).unwrap();
        assert_eq!(filter.clause, "1=1");
        assert!(filter.params.is_empty());
    }

    #[test]
    fn test_keyword_reuses_single_placeholder() {
        let filter = build_bom_filter(&BomFilter {
            keyword: Some("Omega".to_string()),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            filter.clause,
            "1=1 AND (b.name ILIKE $1 OR b.code ILIKE $1 OR b.description ILIKE $1)"
        );
        assert_eq!(filter.params, vec![BindValue::Text("%Omega%".to_string())]);
        assert_placeholders_aligned(&filter);
    }

    #[test]
    fn test_false_boolean_still_filters() {
        let filter = build_bom_filter(&BomFilter {
            is_active: Some(false),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(filter.clause, "1=1 AND b.is_active = $1");
        assert_eq!(filter.params, vec![BindValue::Bool(false)]);
    }

    #[test]
    fn test_all_fields_align_placeholders() {
        let day = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let filter = build_bom_filter(&BomFilter {
            keyword: Some("Omega".to_string()),
            product_ids: Some(vec![Uuid::from_u128(1)]),
            component_sku_ids: Some(vec![Uuid::from_u128(2), Uuid::from_u128(3)]),
            is_active: Some(true),
            created_after: Some(day),
            created_before: Some(day),
        })
        .unwrap();

        assert_eq!(filter.params.len(), 6);
        assert_placeholders_aligned(&filter);
        assert!(filter.clause.contains("bc.sku_id = ANY($3)"));
        assert!(filter.clause.contains("b.created_at >= $5"));
        assert!(filter.clause.contains("b.created_at < $6"));
    }

    #[test]
    fn test_empty_id_list_is_rejected() {
        let err = build_bom_filter(&BomFilter {
            product_ids: Some(Vec::new()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.kind, erp_core::error::ErrorKind::Validation);
    }

    #[test]
    fn test_sort_key_parse_rejects_unknown_columns() {
        assert_eq!(BomSortKey::parse("code"), Some(BomSortKey::Code));
        assert_eq!(BomSortKey::parse("b.code; DROP TABLE boms"), None);
    }
}
