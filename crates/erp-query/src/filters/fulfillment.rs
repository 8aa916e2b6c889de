//! Fulfillment order filter construction.
//!
//! Alias: `f` = `fulfillment_orders`.

use erp_core::AppResult;
use erp_entity::fulfillment::FulfillmentFilter;

use super::{require_keyword, require_non_empty};
use crate::conditions::{ConditionSet, WhereClause};
use crate::date_range::DateRange;

const DOMAIN: &str = "fulfillment";

/// Columns searched by the fulfillment keyword filter.
const KEYWORD_COLUMNS: &[&str] = &["f.order_number", "f.tracking_number"];

/// Allow-listed sort columns for fulfillment list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FulfillmentSortKey {
    OrderNumber,
    ShippedAt,
    #[default]
    CreatedAt,
}

impl FulfillmentSortKey {
    /// The alias-qualified column interpolated into `ORDER BY`.
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::OrderNumber => "f.order_number",
            Self::ShippedAt => "f.shipped_at",
            Self::CreatedAt => "f.created_at",
        }
    }

    /// Parse a user-supplied sort field name.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "order_number" => Some(Self::OrderNumber),
            "shipped_at" => Some(Self::ShippedAt),
            "created_at" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

/// Build the `WHERE` predicate for a fulfillment order list query.
pub fn build_fulfillment_filter(filter: &FulfillmentFilter) -> AppResult<WhereClause> {
    let mut set = ConditionSet::new();

    if let Some(keyword) = filter.keyword.as_deref() {
        require_keyword(DOMAIN, keyword)?;
        set.push_keyword(KEYWORD_COLUMNS, keyword);
    }
    if let Some(statuses) = &filter.statuses {
        require_non_empty(DOMAIN, "statuses", statuses)?;
        set.push_enum_any("f.status", "fulfillment_status", statuses.clone());
    }
    if let Some(customer_id) = filter.customer_id {
        set.push_eq("f.customer_id", customer_id);
    }
    if let Some(warehouse_id) = filter.warehouse_id {
        set.push_eq("f.warehouse_id", warehouse_id);
    }
    if let Some(carrier) = &filter.carrier {
        set.push_eq("f.carrier", carrier.clone());
    }
    set.push_date_range(
        "f.shipped_at",
        &DateRange::from_bounds(filter.shipped_after, filter.shipped_before),
    );
    set.push_date_range(
        "f.created_at",
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
    use erp_entity::fulfillment::FulfillmentStatus;
    use uuid::Uuid;

    #[test]
    fn test_empty_filter_is_neutral() {
        let filter = build_fulfillment_filter(&FulfillmentFilter::default()).unwrap();
        assert_eq!(filter.clause, "1=1");
        assert!(filter.params.is_empty());
    }

    #[test]
    fn test_status_list_binds_one_array_parameter() {
        let filter = build_fulfillment_filter(&FulfillmentFilter {
            statuses: Some(vec![FulfillmentStatus::Picking, FulfillmentStatus::Packed]),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            filter.clause,
            "1=1 AND f.status = ANY($1::fulfillment_status[])"
        );
        assert_eq!(
            filter.params,
            vec![BindValue::TextList(vec![
                "picking".to_string(),
                "packed".to_string()
            ])]
        );
    }

    #[test]
    fn test_two_date_ranges_keep_indices_sequential() {
        let ship_day = NaiveDate::from_ymd_opt(2026, 5, 2).unwrap();
        let create_day = NaiveDate::from_ymd_opt(2026, 4, 28).unwrap();
        let filter = build_fulfillment_filter(&FulfillmentFilter {
            customer_id: Some(Uuid::from_u128(5)),
            shipped_after: Some(ship_day),
            shipped_before: Some(ship_day),
            created_after: Some(create_day),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(filter.params.len(), 4);
        assert_placeholders_aligned(&filter);
        assert!(filter.clause.contains("f.shipped_at >= $2"));
        assert!(filter.clause.contains("f.shipped_at < $3"));
        assert!(filter.clause.contains("f.created_at >= $4"));
    }

    #[test]
    fn test_empty_status_list_is_rejected() {
        let err = build_fulfillment_filter(&FulfillmentFilter {
            statuses: Some(Vec::new()),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.kind, erp_core::error::ErrorKind::Validation);
    }
}
