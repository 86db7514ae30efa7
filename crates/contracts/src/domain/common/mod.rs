//! Types et helpers partagés par tous les domaines

pub mod ids;
pub mod json;

// Re-exports
pub use ids::{CatalogEntryId, ClientId, OrderId};
