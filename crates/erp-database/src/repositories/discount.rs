//! Discount repository implementation.

use sqlx::PgPool;

use erp_core::result::AppResult;
use erp_core::types::pagination::{PageRequest, PageResponse};
use erp_core::types::sorting::SortDirection;
use erp_entity::discount::{Discount, DiscountFilter};
use erp_query::filters::{DiscountSortKey, build_discount_filter};
use erp_query::paginate::{PaginateSpec, paginate};

const DISCOUNT_TABLE: &str = "discounts d";
const DISCOUNT_SELECT: &str = "SELECT d.* FROM discounts d";

/// Repository for discount queries.
#[derive(Debug, Clone)]
pub struct DiscountRepository {
    pool: PgPool,
}

impl DiscountRepository {
    /// Create a new discount repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search discounts with filters and pagination.
    pub async fn search(
        &self,
        filter: &DiscountFilter,
        page: PageRequest,
        sort: DiscountSortKey,
        direction: SortDirection,
    ) -> AppResult<PageResponse<Discount>> {
        let where_clause = build_discount_filter(filter)?;
        paginate(
            &self.pool,
            &PaginateSpec {
                table: DISCOUNT_TABLE,
                joins: &[],
                select: DISCOUNT_SELECT,
                filter: &where_clause,
                page,
                sort_column: sort.as_column(),
                direction,
            },
        )
        .await
    }
}
