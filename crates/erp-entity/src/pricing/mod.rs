//! Pricing domain types.

pub mod filter;
pub mod model;

pub use filter::PricingFilter;
pub use model::{PriceListEntry, PriceListType};
