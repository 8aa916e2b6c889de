//! Core type definitions used across the ERP workspace.

pub mod pagination;
pub mod sorting;

pub use pagination::{OffsetPage, PageRequest, PageResponse};
pub use sorting::SortDirection;
