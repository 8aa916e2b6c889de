//! # erp-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the Harvest ERP domains. Repositories compose the
//! `erp-query` filter builders with the pagination executor.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
