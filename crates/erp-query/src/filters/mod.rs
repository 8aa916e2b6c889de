//! Domain filter builders.
//!
//! One module per ERP domain. Each builder takes that domain's typed filter
//! request and produces a [`WhereClause`](crate::conditions::WhereClause);
//! column and alias knowledge lives here, next to the sort-key allow-list
//! for the same domain.

pub mod bom;
pub mod customer;
pub mod discount;
pub mod fulfillment;
pub mod inventory;
pub mod pricing;

pub use bom::{BomSortKey, build_bom_filter};
pub use customer::{CustomerSortKey, build_customer_filter};
pub use discount::{DiscountSortKey, build_discount_filter};
pub use fulfillment::{FulfillmentSortKey, build_fulfillment_filter};
pub use inventory::{
    InventorySortKey, build_location_inventory_filter, build_warehouse_inventory_filter,
};
pub use pricing::{PricingSortKey, build_pricing_filter};

use erp_core::{AppError, AppResult};

/// Reject an explicitly supplied empty list before any SQL is assembled.
///
/// An absent list means "no filter"; an empty one is a caller mistake that
/// would otherwise silently match nothing.
fn require_non_empty<T>(domain: &'static str, field: &'static str, values: &[T]) -> AppResult<()> {
    if values.is_empty() {
        tracing::warn!(domain, field, "rejected filter with empty list");
        return Err(AppError::validation(format!(
            "{field} must not be empty when provided"
        )));
    }
    Ok(())
}

/// Reject a keyword that is blank after whitespace collapsing.
fn require_keyword(domain: &'static str, keyword: &str) -> AppResult<()> {
    if keyword.trim().is_empty() {
        tracing::warn!(domain, "rejected blank keyword filter");
        return Err(AppError::validation("keyword must not be blank"));
    }
    Ok(())
}
