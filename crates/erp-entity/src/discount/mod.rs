//! Discount domain types.

pub mod filter;
pub mod model;

pub use filter::DiscountFilter;
pub use model::{Discount, DiscountStatus, DiscountType};
