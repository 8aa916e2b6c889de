//! Price list repository implementation.

use sqlx::PgPool;

use erp_core::result::AppResult;
use erp_core::types::pagination::{PageRequest, PageResponse};
use erp_core::types::sorting::SortDirection;
use erp_entity::pricing::{PriceListEntry, PricingFilter};
use erp_query::filters::{PricingSortKey, build_pricing_filter};
use erp_query::paginate::{PaginateSpec, paginate};

const PRICING_TABLE: &str = "price_list_entries p";
const PRICING_JOINS: &[&str] = &[
    "JOIN skus s ON s.id = p.sku_id",
    "JOIN products pr ON pr.id = s.product_id",
];

/// Data projection over the same tables and joins as the count query.
fn pricing_select() -> String {
    format!(
        "SELECT p.id, p.sku_id, s.code AS sku_code, pr.name AS product_name, pr.brand, \
         p.list_type, p.unit_price_cents, p.currency, p.valid_from, p.valid_to, \
         p.created_at, p.updated_at \
         FROM {PRICING_TABLE} {}",
        PRICING_JOINS.join(" ")
    )
}

/// Repository for price list queries.
#[derive(Debug, Clone)]
pub struct PricingRepository {
    pool: PgPool,
}

impl PricingRepository {
    /// Create a new pricing repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search price list entries with filters and pagination.
    pub async fn search(
        &self,
        filter: &PricingFilter,
        page: PageRequest,
        sort: PricingSortKey,
        direction: SortDirection,
    ) -> AppResult<PageResponse<PriceListEntry>> {
        let where_clause = build_pricing_filter(filter)?;
        let select = pricing_select();
        paginate(
            &self.pool,
            &PaginateSpec {
                table: PRICING_TABLE,
                joins: PRICING_JOINS,
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
    fn test_select_projects_over_the_count_joins() {
        let select = pricing_select();
        for join in PRICING_JOINS {
            assert!(select.contains(join));
        }
        assert!(select.contains("pr.brand"));
    }
}
