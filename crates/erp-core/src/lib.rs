//! # erp-core
//!
//! Core crate for Harvest ERP. Contains configuration schemas, shared
//! pagination/sorting types, logging setup, and the unified error system.
//!
//! This crate has **no** internal dependencies on other ERP crates.

pub mod config;
pub mod error;
pub mod logging;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
