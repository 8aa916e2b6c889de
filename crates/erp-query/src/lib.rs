//! # erp-query
//!
//! The dynamic SQL filter and pagination core of Harvest ERP.
//!
//! Every list endpoint in the application funnels through this crate: a
//! domain filter builder turns a typed filter request into a parameterized
//! `WHERE` clause ([`WhereClause`]), and the pagination executor combines it
//! with a base query, an allow-listed sort column, and page parameters into
//! a count query and a data query issued concurrently.
//!
//! Placeholder discipline is the load-bearing invariant here: parameters can
//! only enter a query through [`ConditionSet::bind`], which keeps the `$N`
//! indices and the bound-value list in lockstep by construction.

pub mod conditions;
pub mod date_range;
pub mod filters;
pub mod paginate;
pub mod value;

pub use conditions::{ConditionSet, WhereClause};
pub use date_range::DateRange;
pub use paginate::{OffsetSpec, PaginateSpec, paginate, paginate_by_offset};
pub use value::BindValue;
