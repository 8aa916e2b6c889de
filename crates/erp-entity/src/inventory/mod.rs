//! Inventory domain types.
//!
//! Inventory rows are polymorphic: a row holds either a product batch or a
//! packaging-material batch, discriminated by the `batch_type` column and
//! modeled here as [`BatchKind`].

pub mod batch;
pub mod filter;
pub mod model;

pub use batch::BatchKind;
pub use filter::{InventoryFilter, InventoryVisibility};
pub use model::{LocationInventory, WarehouseInventory};
