//! Inventory filter construction for the polymorphic batch rows.
//!
//! Aliases: `inv` = `location_inventory` / `warehouse_inventory`,
//! `pb` = `product_batches`, `sk` = `skus`, `p` = `products`,
//! `mb` = `material_batches`, `pm` = `packaging_materials`.
//!
//! Every inventory query carries a visibility guard: product rows must have
//! live status linkage across product, SKU, and batch; material rows must
//! link to a material batch. Rows matching neither shape never surface.
//! Batch-specific filters (lot number, expiry) test the correct column per
//! shape by branching on `inv.batch_type`.

use erp_core::{AppError, AppResult};
use erp_entity::inventory::{InventoryFilter, InventoryVisibility};

use super::{require_keyword, require_non_empty};
use crate::conditions::{ConditionSet, WhereClause, keyword_pattern};
use crate::date_range::DateRange;
use crate::value::BindValue;

const DOMAIN: &str = "inventory";

/// Columns searched by the inventory keyword filter.
const KEYWORD_COLUMNS: &[&str] = &["sk.code", "p.name", "pm.name"];

/// Visibility guard distinguishing the two batch shapes.
const BATCH_SHAPE_GUARD: &str = "((inv.batch_type = 'product' AND p.status_id IS NOT NULL \
     AND sk.status_id IS NOT NULL AND pb.status_id IS NOT NULL) \
     OR (inv.batch_type = 'packaging_material' AND mb.id IS NOT NULL))";

/// Allow-listed sort columns for inventory list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InventorySortKey {
    SkuCode,
    QuantityOnHand,
    #[default]
    UpdatedAt,
}

impl InventorySortKey {
    /// The alias-qualified column interpolated into `ORDER BY`.
    pub fn as_column(&self) -> &'static str {
        match self {
            Self::SkuCode => "sk.code",
            Self::QuantityOnHand => "inv.quantity_on_hand",
            Self::UpdatedAt => "inv.updated_at",
        }
    }

    /// Parse a user-supplied sort field name.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "sku_code" => Some(Self::SkuCode),
            "quantity_on_hand" => Some(Self::QuantityOnHand),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }
}

/// Build the `WHERE` predicate for a location inventory query.
pub fn build_location_inventory_filter(
    filter: &InventoryFilter,
    visibility: &InventoryVisibility,
) -> AppResult<WhereClause> {
    if filter.warehouse_ids.is_some() {
        tracing::error!(domain = DOMAIN, "warehouse_ids supplied to location inventory query");
        return Err(AppError::query_build(
            "warehouse_ids is not applicable to location inventory",
        ));
    }

    let mut set = ConditionSet::new();
    push_common_conditions(&mut set, filter, visibility)?;
    if let Some(ids) = &filter.location_ids {
        require_non_empty(DOMAIN, "location_ids", ids)?;
        set.push_any("inv.location_id", ids.clone());
    }

    Ok(set.into_where_clause())
}

/// Build the `WHERE` predicate for a warehouse inventory query.
pub fn build_warehouse_inventory_filter(
    filter: &InventoryFilter,
    visibility: &InventoryVisibility,
) -> AppResult<WhereClause> {
    if filter.location_ids.is_some() {
        tracing::error!(domain = DOMAIN, "location_ids supplied to warehouse inventory query");
        return Err(AppError::query_build(
            "location_ids is not applicable to warehouse inventory",
        ));
    }

    let mut set = ConditionSet::new();
    push_common_conditions(&mut set, filter, visibility)?;
    if let Some(ids) = &filter.warehouse_ids {
        require_non_empty(DOMAIN, "warehouse_ids", ids)?;
        set.push_any("inv.warehouse_id", ids.clone());
    }

    Ok(set.into_where_clause())
}

/// Conditions shared by both inventory variants.
fn push_common_conditions(
    set: &mut ConditionSet,
    filter: &InventoryFilter,
    visibility: &InventoryVisibility,
) -> AppResult<()> {
    set.push(BATCH_SHAPE_GUARD);

    if let Some(status_id) = visibility.active_status_id {
        let n = set.bind(status_id);
        set.push(format!(
            "(inv.batch_type = 'packaging_material' OR pb.status_id = ${n})"
        ));
    }

    if let Some(keyword) = filter.keyword.as_deref() {
        require_keyword(DOMAIN, keyword)?;
        set.push_keyword(KEYWORD_COLUMNS, keyword);
    }
    if let Some(kind) = filter.batch_kind {
        set.push_enum_eq("inv.batch_type", "batch_type", kind);
    }
    if let Some(ids) = &filter.sku_ids {
        require_non_empty(DOMAIN, "sku_ids", ids)?;
        set.push_any("pb.sku_id", ids.clone());
    }
    if let Some(lot) = filter.lot_number.as_deref() {
        require_keyword(DOMAIN, lot)?;
        let n = set.bind(BindValue::Text(keyword_pattern(lot)));
        set.push(format!(
            "((inv.batch_type = 'product' AND pb.lot_number ILIKE ${n}) \
             OR (inv.batch_type = 'packaging_material' AND mb.lot_number ILIKE ${n}))"
        ));
    }
    push_expiry_range(
        set,
        &DateRange::from_bounds(filter.expires_after, filter.expires_before),
    );
    if filter.exclude_empty {
        set.push("(inv.quantity_on_hand > 0 OR inv.quantity_reserved > 0)");
    }

    Ok(())
}

/// Expiry bounds branch per batch shape; each bound binds once and is
/// reused by both branches.
fn push_expiry_range(set: &mut ConditionSet, range: &DateRange) {
    if let Some(start) = range.start {
        let n = set.bind(start);
        set.push(format!(
            "((inv.batch_type = 'product' AND pb.expires_at >= ${n}) \
             OR (inv.batch_type = 'packaging_material' AND mb.expires_at >= ${n}))"
        ));
    }
    if let Some(end) = range.end {
        let n = set.bind(end);
        set.push(format!(
            "((inv.batch_type = 'product' AND pb.expires_at < ${n}) \
             OR (inv.batch_type = 'packaging_material' AND mb.expires_at < ${n}))"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::test_support::assert_placeholders_aligned;
    use chrono::NaiveDate;
    use erp_core::error::ErrorKind;
    use erp_entity::inventory::BatchKind;
    use uuid::Uuid;

    #[test]
    fn test_guard_is_always_present() {
        let filter =
            build_location_inventory_filter(&InventoryFilter::default(), &InventoryVisibility::default())
                .unwrap();

        assert!(filter.clause.starts_with("1=1 AND ((inv.batch_type = 'product'"));
        assert!(filter.clause.contains("p.status_id IS NOT NULL"));
        assert!(filter.clause.contains("sk.status_id IS NOT NULL"));
        assert!(filter.clause.contains("pb.status_id IS NOT NULL"));
        assert!(
            filter
                .clause
                .contains("inv.batch_type = 'packaging_material' AND mb.id IS NOT NULL")
        );
        assert!(filter.params.is_empty());
    }

    #[test]
    fn test_lot_number_branches_share_one_placeholder() {
        let filter = build_location_inventory_filter(
            &InventoryFilter {
                lot_number: Some("LOT-88".to_string()),
                ..Default::default()
            },
            &InventoryVisibility::default(),
        )
        .unwrap();

        assert!(filter.clause.contains("pb.lot_number ILIKE $1"));
        assert!(filter.clause.contains("mb.lot_number ILIKE $1"));
        assert_eq!(filter.params.len(), 1);
        assert_eq!(
            filter.params[0],
            crate::value::BindValue::Text("%LOT-88%".to_string())
        );
    }

    #[test]
    fn test_expiry_range_branches_per_batch_shape() {
        let day = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        let filter = build_warehouse_inventory_filter(
            &InventoryFilter {
                expires_after: Some(day),
                expires_before: Some(day),
                ..Default::default()
            },
            &InventoryVisibility::default(),
        )
        .unwrap();

        assert!(filter.clause.contains("pb.expires_at >= $1"));
        assert!(filter.clause.contains("mb.expires_at >= $1"));
        assert!(filter.clause.contains("pb.expires_at < $2"));
        assert!(filter.clause.contains("mb.expires_at < $2"));
        assert_eq!(filter.params.len(), 2);
        assert_placeholders_aligned(&filter);
    }

    #[test]
    fn test_exclude_empty_adds_quantity_condition_without_parameters() {
        let filter = build_location_inventory_filter(
            &InventoryFilter {
                exclude_empty: true,
                ..Default::default()
            },
            &InventoryVisibility::default(),
        )
        .unwrap();

        assert!(
            filter
                .clause
                .ends_with("(inv.quantity_on_hand > 0 OR inv.quantity_reserved > 0)")
        );
        assert!(filter.params.is_empty());
    }

    #[test]
    fn test_active_status_restriction_spares_material_rows() {
        let status_id = Uuid::from_u128(42);
        let filter = build_location_inventory_filter(
            &InventoryFilter::default(),
            &InventoryVisibility {
                active_status_id: Some(status_id),
            },
        )
        .unwrap();

        assert!(
            filter
                .clause
                .contains("(inv.batch_type = 'packaging_material' OR pb.status_id = $1)")
        );
        assert_eq!(filter.params.len(), 1);
    }

    #[test]
    fn test_wrong_scope_field_is_a_query_build_error() {
        let err = build_location_inventory_filter(
            &InventoryFilter {
                warehouse_ids: Some(vec![Uuid::from_u128(1)]),
                ..Default::default()
            },
            &InventoryVisibility::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::QueryBuild);

        let err = build_warehouse_inventory_filter(
            &InventoryFilter {
                location_ids: Some(vec![Uuid::from_u128(1)]),
                ..Default::default()
            },
            &InventoryVisibility::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::QueryBuild);
    }

    #[test]
    fn test_full_filter_aligns_placeholders() {
        let day = NaiveDate::from_ymd_opt(2026, 7, 1).unwrap();
        let filter = build_warehouse_inventory_filter(
            &InventoryFilter {
                keyword: Some("chamomile".to_string()),
                batch_kind: Some(BatchKind::Product),
                sku_ids: Some(vec![Uuid::from_u128(3)]),
                lot_number: Some("LOT".to_string()),
                expires_after: Some(day),
                expires_before: Some(day),
                exclude_empty: true,
                warehouse_ids: Some(vec![Uuid::from_u128(8)]),
                ..Default::default()
            },
            &InventoryVisibility {
                active_status_id: Some(Uuid::from_u128(99)),
            },
        )
        .unwrap();

        assert_eq!(filter.params.len(), 8);
        assert_placeholders_aligned(&filter);
    }
}
