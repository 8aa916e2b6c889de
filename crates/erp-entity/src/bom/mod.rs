//! Bill-of-materials domain types.

pub mod filter;
pub mod model;

pub use filter::BomFilter;
pub use model::BillOfMaterials;
