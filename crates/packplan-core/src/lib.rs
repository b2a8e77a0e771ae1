//! # packplan-core: Order Pack Allocation
//!
//! Deterministic allocation of order demand onto a catalog of fixed
//! pack sizes. Orders ship only in whole packs, so the allocator
//! answers one question: which packs, and how many of each, cover the
//! demanded item count without shipping more than the rules allow.
//!
//! ## Modules
//!
//! - [`catalog`]: validated pack sizes and the normalized catalog
//! - [`demand`]: validated order demand
//! - [`allocator`]: the single-pass greedy engine and its policies
//! - [`plan`]: allocation plans, wire format, and merging
//! - [`source`]: the catalog source seam and the in-memory source
//! - [`error`]: the structured error hierarchy
//!
//! ## Example
//!
//! ```
//! use packplan_core::{Allocator, Catalog, Demand};
//!
//! # fn main() -> Result<(), packplan_core::PackplanError> {
//! let catalog = Catalog::from_sizes(&[250, 500, 1000, 2000, 5000])?;
//! let plan = Allocator::new().allocate(&catalog, Demand::new(12_001)?)?;
//!
//! let shipped: Vec<(u64, u64)> = plan
//!     .entries()
//!     .iter()
//!     .map(|entry| (entry.size.get(), entry.quantity))
//!     .collect();
//! assert_eq!(shipped, vec![(5000, 2), (2000, 1), (250, 1)]);
//! # Ok(())
//! # }
//! ```

pub mod allocator;
pub mod catalog;
pub mod demand;
pub mod error;
pub mod plan;
pub mod source;

pub use allocator::{Allocator, EmptyCatalogPolicy};
pub use catalog::{Catalog, PackSize};
pub use demand::Demand;
pub use error::{AllocateError, CatalogError, DemandError, PackplanError, SourceError};
pub use plan::{AllocationEntry, AllocationPlan};
pub use source::{CatalogSource, StaticCatalogSource};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_sync() {
        assert_send_sync::<Allocator>();
        assert_send_sync::<Catalog>();
        assert_send_sync::<PackSize>();
        assert_send_sync::<Demand>();
        assert_send_sync::<AllocationEntry>();
        assert_send_sync::<AllocationPlan>();
        assert_send_sync::<PackplanError>();
    }
}
