//! Customer repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use erp_core::error::{AppError, ErrorKind};
use erp_core::result::AppResult;
use erp_core::types::pagination::{OffsetPage, PageRequest, PageResponse};
use erp_core::types::sorting::SortDirection;
use erp_entity::customer::{Customer, CustomerFilter};
use erp_query::filters::{CustomerSortKey, build_customer_filter};
use erp_query::paginate::{OffsetSpec, PaginateSpec, paginate, paginate_by_offset};

const CUSTOMER_TABLE: &str = "customers c";
const CUSTOMER_SELECT: &str = "SELECT c.* FROM customers c";

/// Repository for customer account queries.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Create a new customer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a customer by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Customer>> {
        sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find customer", e))
    }

    /// Search customers with filters and pagination.
    pub async fn search(
        &self,
        filter: &CustomerFilter,
        page: PageRequest,
        sort: CustomerSortKey,
        direction: SortDirection,
    ) -> AppResult<PageResponse<Customer>> {
        let where_clause = build_customer_filter(filter)?;
        paginate(
            &self.pool,
            &PaginateSpec {
                table: CUSTOMER_TABLE,
                joins: &[],
                select: CUSTOMER_SELECT,
                filter: &where_clause,
                page,
                sort_column: sort.as_column(),
                direction,
            },
        )
        .await
    }

    /// Incremental lookup for autocomplete ("load more" style).
    ///
    /// Matches active accounts against the keyword and returns one slice
    /// plus whether more rows exist past it.
    pub async fn lookup(
        &self,
        keyword: &str,
        limit: u64,
        offset: u64,
    ) -> AppResult<OffsetPage<Customer>> {
        let filter = CustomerFilter {
            keyword: Some(keyword.to_string()),
            is_active: Some(true),
            ..Default::default()
        };
        let where_clause = build_customer_filter(&filter)?;
        paginate_by_offset(
            &self.pool,
            &OffsetSpec {
                select: CUSTOMER_SELECT,
                filter: &where_clause,
                limit,
                offset,
                sort_column: CustomerSortKey::Name.as_column(),
                direction: SortDirection::Asc,
            },
        )
        .await
    }
}
