//! Repository implementations for the Harvest ERP domains.

pub mod bom;
pub mod customer;
pub mod discount;
pub mod fulfillment;
pub mod inventory;
pub mod pricing;

pub use bom::BomRepository;
pub use customer::CustomerRepository;
pub use discount::DiscountRepository;
pub use fulfillment::FulfillmentRepository;
pub use inventory::InventoryRepository;
pub use pricing::PricingRepository;
