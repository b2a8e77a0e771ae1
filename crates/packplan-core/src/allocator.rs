//! # Pack Allocation Engine
//!
//! The single-pass greedy allocator. Given a normalized [`Catalog`]
//! and a validated [`Demand`], [`Allocator::allocate`] walks the
//! catalog from largest size to smallest, recording how many packs of
//! each size to ship, and resolves the tail of the order with two
//! rules applied at the smallest size:
//!
//! - **Boundary substitution.** At the smallest size, when more than
//!   one pack's worth of items is still owed, the append records the
//!   second-smallest size instead, keeping the count already computed
//!   from the smallest size. The same number of packs ships in the
//!   larger size, covering the remainder that a run of smallest packs
//!   would have left for one more pack.
//! - **Terminal fallback.** If items are still owed after the smallest
//!   size has been processed, one extra smallest pack is appended and
//!   the walk ends.
//!
//! Both rules round up, never down: for a non-empty catalog the plan
//! always ships at least the demanded item count.
//!
//! ## Determinism
//!
//! Allocation is a pure function of the catalog and the demand. No
//! clock, no randomness, no state on [`Allocator`] beyond its policy:
//! the same inputs always produce byte-identical plans.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{Catalog, PackSize};
use crate::demand::Demand;
use crate::error::AllocateError;
use crate::plan::{AllocationEntry, AllocationPlan};

/// What [`Allocator::allocate`] does when the catalog offers no sizes
/// but the order demands items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyCatalogPolicy {
    /// Refuse the order with [`AllocateError::EmptyCatalog`].
    #[default]
    Reject,
    /// Return an empty plan and log a warning. The order ships zero
    /// items against a positive demand.
    AllowUnderfulfill,
}

impl EmptyCatalogPolicy {
    /// Stable token for logs and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::AllowUnderfulfill => "allow_underfulfill",
        }
    }
}

impl std::fmt::Display for EmptyCatalogPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pack allocation engine.
#[derive(Debug, Clone, Default)]
pub struct Allocator {
    empty_catalog_policy: EmptyCatalogPolicy,
}

impl Allocator {
    /// An allocator with the default [`EmptyCatalogPolicy::Reject`].
    pub fn new() -> Self {
        Self::default()
    }

    /// An allocator with an explicit empty-catalog policy.
    pub fn with_policy(empty_catalog_policy: EmptyCatalogPolicy) -> Self {
        Self {
            empty_catalog_policy,
        }
    }

    /// The configured empty-catalog policy.
    pub fn empty_catalog_policy(&self) -> EmptyCatalogPolicy {
        self.empty_catalog_policy
    }

    /// Allocate packs for `demand` items out of `catalog`.
    ///
    /// Zero demand yields an empty plan without consulting the catalog.
    /// A positive demand against an empty catalog is resolved by the
    /// configured [`EmptyCatalogPolicy`].
    ///
    /// # Errors
    ///
    /// Returns [`AllocateError::EmptyCatalog`] when the catalog is
    /// empty, the demand is positive, and the policy is
    /// [`EmptyCatalogPolicy::Reject`].
    pub fn allocate(
        &self,
        catalog: &Catalog,
        demand: Demand,
    ) -> Result<AllocationPlan, AllocateError> {
        if demand.is_zero() {
            return Ok(AllocationPlan::empty());
        }
        if catalog.is_empty() {
            return match self.empty_catalog_policy {
                EmptyCatalogPolicy::Reject => Err(AllocateError::EmptyCatalog {
                    demand: demand.get(),
                }),
                EmptyCatalogPolicy::AllowUnderfulfill => {
                    warn!(
                        demand = demand.get(),
                        "catalog is empty; returning an empty plan for a positive demand"
                    );
                    Ok(AllocationPlan::empty())
                }
            };
        }

        let (entries, steps) = walk(catalog.sizes(), demand.get());
        let plan = AllocationPlan::from_entries(entries);
        debug!(
            catalog_len = catalog.len(),
            demand = demand.get(),
            entries = plan.len(),
            steps,
            "allocated order"
        );
        Ok(plan)
    }
}

/// One pass over the sizes, largest first. Returns the appended
/// entries and the number of sizes visited.
fn walk(sizes: &[PackSize], demand: u64) -> (Vec<AllocationEntry>, usize) {
    let mut entries = Vec::new();
    let mut steps = 0;
    let mut remaining = demand;
    let mut index = 0;

    while remaining > 0 && index < sizes.len() {
        steps += 1;
        let last = index + 1 == sizes.len();
        let cursor = sizes[index];
        let count = remaining / cursor.get();

        // Boundary substitution: at the smallest size with strictly
        // more than one pack still owed, record the second-smallest
        // size under the count already computed. Skipped when the
        // catalog has a single size and no second-smallest exists.
        let size = if last && index > 0 && remaining > cursor.get() {
            let substituted = sizes[index - 1];
            debug!(
                remaining,
                smallest = cursor.get(),
                substituted = substituted.get(),
                "boundary substitution at smallest size"
            );
            substituted
        } else {
            cursor
        };

        if count > 0 {
            entries.push(AllocationEntry {
                size,
                quantity: count,
            });
            // A substituted debit can exceed u64 (count came from the
            // smallest size, the debit uses the second-smallest), so
            // the product is taken in u128. When it covers the
            // remainder the walk is done; otherwise the product fits
            // u64 because it is below `remaining`.
            let debit = u128::from(count) * u128::from(size.get());
            if debit >= u128::from(remaining) {
                remaining = 0;
            } else {
                remaining -= count * size.get();
            }
        }

        if remaining > 0 {
            if last {
                // Terminal fallback: one more of the smallest size
                // covers whatever is left.
                entries.push(AllocationEntry {
                    size: cursor,
                    quantity: 1,
                });
                remaining = 0;
            } else {
                index += 1;
            }
        }
    }

    (entries, steps)
}

// -- Tests ----------------------------------------------------------------


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Catalogs of 1 to 12 distinct sizes.
    fn catalogs() -> impl Strategy<Value = Catalog> {
        prop::collection::btree_set(1u64..=10_000, 1..=12)
            .prop_map(|set| Catalog::from_sizes(&set.into_iter().collect::<Vec<_>>()).unwrap())
    }

    proptest! {
        /// Same inputs, same plan.
        #[test]
        fn allocate_deterministic(catalog in catalogs(), demand in 0u64..=1_000_000) {
            let allocator = Allocator::new();
            let first = allocator.allocate(&catalog, Demand::from_items(demand)).unwrap();
            let second = allocator.allocate(&catalog, Demand::from_items(demand)).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Plans never ship fewer items than the order demanded.
        #[test]
        fn coverage_at_least_demand(catalog in catalogs(), demand in 0u64..=1_000_000) {
            let plan = Allocator::new().allocate(&catalog, Demand::from_items(demand)).unwrap();
            prop_assert!(plan.total_items() >= u128::from(demand));
        }

        /// At most one entry per size plus the terminal fallback.
        #[test]
        fn plan_len_bounded(catalog in catalogs(), demand in 0u64..=1_000_000) {
            let plan = Allocator::new().allocate(&catalog, Demand::from_items(demand)).unwrap();
            prop_assert!(plan.len() <= catalog.len() + 1);
        }

        /// The walk is single-pass: each size is visited at most once.
        #[test]
        fn steps_bounded_by_catalog_len(catalog in catalogs(), demand in 0u64..=1_000_000) {
            let (_, steps) = walk(catalog.sizes(), demand);
            prop_assert!(steps <= catalog.len());
        }

        /// No zero-quantity entries ever appear.
        #[test]
        fn quantities_positive(catalog in catalogs(), demand in 0u64..=1_000_000) {
            let plan = Allocator::new().allocate(&catalog, Demand::from_items(demand)).unwrap();
            for entry in &plan {
                prop_assert!(entry.quantity >= 1);
            }
        }

        /// Entries appear in non-increasing size order.
        #[test]
        fn plan_sizes_non_increasing(catalog in catalogs(), demand in 0u64..=1_000_000) {
            let plan = Allocator::new().allocate(&catalog, Demand::from_items(demand)).unwrap();
            for pair in plan.entries().windows(2) {
                prop_assert!(pair[0].size >= pair[1].size);
            }
        }

        /// Every planned size is a size the catalog actually offers.
        #[test]
        fn plan_sizes_come_from_catalog(catalog in catalogs(), demand in 0u64..=1_000_000) {
            let plan = Allocator::new().allocate(&catalog, Demand::from_items(demand)).unwrap();
            for entry in &plan {
                prop_assert!(catalog.sizes().contains(&entry.size));
            }
        }

        /// Zero demand is always an empty plan, whatever the catalog.
        #[test]
        fn zero_demand_always_empty(catalog in catalogs()) {
            let plan = Allocator::new().allocate(&catalog, Demand::from_items(0)).unwrap();
            prop_assert!(plan.is_empty());
        }
    }
}
