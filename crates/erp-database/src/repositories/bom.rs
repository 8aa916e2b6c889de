//! Bill-of-materials repository implementation.

use sqlx::PgPool;

use erp_core::result::AppResult;
use erp_core::types::pagination::{PageRequest, PageResponse};
use erp_core::types::sorting::SortDirection;
use erp_entity::bom::{BillOfMaterials, BomFilter};
use erp_query::filters::{BomSortKey, build_bom_filter};
use erp_query::paginate::{PaginateSpec, paginate};

const BOM_TABLE: &str = "boms b";
const BOM_SELECT: &str = "SELECT b.* FROM boms b";

/// Repository for BOM list and query operations.
#[derive(Debug, Clone)]
pub struct BomRepository {
    pool: PgPool,
}

impl BomRepository {
    /// Create a new BOM repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Search BOMs with filters and pagination.
    pub async fn search(
        &self,
        filter: &BomFilter,
        page: PageRequest,
        sort: BomSortKey,
        direction: SortDirection,
    ) -> AppResult<PageResponse<BillOfMaterials>> {
        let where_clause = build_bom_filter(filter)?;
        paginate(
            &self.pool,
            &PaginateSpec {
                table: BOM_TABLE,
                joins: &[],
                select: BOM_SELECT,
                filter: &where_clause,
                page,
                sort_column: sort.as_column(),
                direction,
            },
        )
        .await
    }
}
