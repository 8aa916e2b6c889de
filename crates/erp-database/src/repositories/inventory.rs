//! Inventory repository implementation.
//!
//! Both variants join the polymorphic batch tables with `LEFT JOIN`: every
//! row links to exactly one of `product_batches`/`material_batches`, so the
//! other side's columns come back null and the visibility guard in the
//! filter layer decides which rows surface.

use sqlx::PgPool;

use erp_core::result::AppResult;
use erp_core::types::pagination::{PageRequest, PageResponse};
use erp_core::types::sorting::SortDirection;
use erp_entity::inventory::{
    InventoryFilter, InventoryVisibility, LocationInventory, WarehouseInventory,
};
use erp_query::filters::{
    InventorySortKey, build_location_inventory_filter, build_warehouse_inventory_filter,
};
use erp_query::paginate::{PaginateSpec, paginate};

const LOCATION_TABLE: &str = "location_inventory inv";
const WAREHOUSE_TABLE: &str = "warehouse_inventory inv";

const INVENTORY_JOINS: &[&str] = &[
    "LEFT JOIN product_batches pb ON pb.id = inv.product_batch_id",
    "LEFT JOIN skus sk ON sk.id = pb.sku_id",
    "LEFT JOIN products p ON p.id = sk.product_id",
    "LEFT JOIN material_batches mb ON mb.id = inv.material_batch_id",
    "LEFT JOIN packaging_materials pm ON pm.id = mb.material_id",
];

/// Data projection over the same tables and joins as the count query.
fn inventory_select(table: &str, holder_column: &str) -> String {
    format!(
        "SELECT inv.id, inv.{holder_column}, inv.batch_type, \
         inv.product_batch_id, inv.material_batch_id, \
         sk.code AS sku_code, p.name AS product_name, pm.name AS material_name, \
         pb.lot_number AS product_lot_number, mb.lot_number AS material_lot_number, \
         pb.expires_at AS product_expires_at, mb.expires_at AS material_expires_at, \
         inv.quantity_on_hand, inv.quantity_reserved, inv.updated_at \
         FROM {table} {}",
        INVENTORY_JOINS.join(" ")
    )
}

/// Repository for location- and warehouse-level inventory queries.
#[derive(Debug, Clone)]
pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    /// Create a new inventory repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search inventory at storage-location granularity.
    pub async fn search_locations(
        &self,
        filter: &InventoryFilter,
        visibility: &InventoryVisibility,
        page: PageRequest,
        sort: InventorySortKey,
        direction: SortDirection,
    ) -> AppResult<PageResponse<LocationInventory>> {
        let where_clause = build_location_inventory_filter(filter, visibility)?;
        let select = inventory_select(LOCATION_TABLE, "location_id");
        paginate(
            &self.pool,
            &PaginateSpec {
                table: LOCATION_TABLE,
                joins: INVENTORY_JOINS,
                select: &select,
                filter: &where_clause,
                page,
                sort_column: sort.as_column(),
                direction,
            },
        )
        .await
    }

    /// Search inventory aggregated at warehouse granularity.
    pub async fn search_warehouses(
        &self,
        filter: &InventoryFilter,
        visibility: &InventoryVisibility,
        page: PageRequest,
        sort: InventorySortKey,
        direction: SortDirection,
    ) -> AppResult<PageResponse<WarehouseInventory>> {
        let where_clause = build_warehouse_inventory_filter(filter, visibility)?;
        let select = inventory_select(WAREHOUSE_TABLE, "warehouse_id");
        paginate(
            &self.pool,
            &PaginateSpec {
                table: WAREHOUSE_TABLE,
                joins: INVENTORY_JOINS,
                select: &select,
                filter: &where_clause,
                page,
                sort_column: sort.as_column(),
                direction,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_projects_both_batch_branches() {
        let select = inventory_select(LOCATION_TABLE, "location_id");
        assert!(select.contains("pb.lot_number AS product_lot_number"));
        assert!(select.contains("mb.lot_number AS material_lot_number"));
        assert!(select.contains("inv.location_id"));
        for join in INVENTORY_JOINS {
            assert!(select.contains(join));
        }
    }
}
