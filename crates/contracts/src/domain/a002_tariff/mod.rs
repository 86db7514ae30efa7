pub mod aggregate;
pub mod catalog;

pub use aggregate::{CatalogEntry, PricingMode};
pub use catalog::{CatalogIndex, CatalogSelection};
