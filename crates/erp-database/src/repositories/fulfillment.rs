//! Fulfillment order repository implementation.

use sqlx::PgPool;

use erp_core::result::AppResult;
use erp_core::types::pagination::{PageRequest, PageResponse};
use erp_core::types::sorting::SortDirection;
use erp_entity::fulfillment::{FulfillmentFilter, FulfillmentOrder};
use erp_query::filters::{FulfillmentSortKey, build_fulfillment_filter};
use erp_query::paginate::{PaginateSpec, paginate};

const FULFILLMENT_TABLE: &str = "fulfillment_orders f";
const FULFILLMENT_SELECT: &str = "SELECT f.* FROM fulfillment_orders f";

/// Repository for fulfillment order queries.
#[derive(Debug, Clone)]
pub struct FulfillmentRepository {
    pool: PgPool,
}

impl FulfillmentRepository {
    /// Create a new fulfillment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search fulfillment orders with filters and pagination.
    pub async fn search(
        &self,
        filter: &FulfillmentFilter,
        page: PageRequest,
        sort: FulfillmentSortKey,
        direction: SortDirection,
    ) -> AppResult<PageResponse<FulfillmentOrder>> {
        let where_clause = build_fulfillment_filter(filter)?;
        paginate(
            &self.pool,
            &PaginateSpec {
                table: FULFILLMENT_TABLE,
                joins: &[],
                select: FULFILLMENT_SELECT,
                filter: &where_clause,
                page,
                sort_column: sort.as_column(),
                direction,
            },
        )
        .await
    }
}
