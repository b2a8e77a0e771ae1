//! # Allocation Plans
//!
//! The output side of allocation: one [`AllocationEntry`] per append
//! the walk performed, in walk order, collected into an
//! [`AllocationPlan`]. The plan is a faithful trace: entries for the
//! same size are NOT merged at this layer, because the walk can record
//! the same size twice (a boundary substitution records the size the
//! previous index already appended; a single-size catalog's fallback
//! re-appends the smallest size). [`AllocationPlan::merged`] produces
//! the consolidated per-size view when a caller wants totals instead
//! of the trace.
//!
//! On the wire an entry is `{"pack": <size>, "quantity": <count>}`,
//! matching the field names order consumers already parse.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::PackSize;

/// One line of an allocation plan: ship `quantity` packs of `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// The pack size being shipped.
    #[serde(rename = "pack")]
    pub size: PackSize,
    /// How many packs of that size to ship. Always at least 1.
    pub quantity: u64,
}

impl AllocationEntry {
    /// Items this entry ships. Widened: `size * quantity` can exceed
    /// `u64` for adversarial plans even though allocator output never
    /// does.
    pub fn items(&self) -> u128 {
        u128::from(self.size.get()) * u128::from(self.quantity)
    }
}

/// An ordered allocation plan: the walk's appends, largest size first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationPlan(Vec<AllocationEntry>);

impl AllocationPlan {
    /// The empty plan: nothing to ship.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a plan from entries, preserving their order.
    pub fn from_entries(entries: Vec<AllocationEntry>) -> Self {
        Self(entries)
    }

    /// The entries in walk order.
    pub fn entries(&self) -> &[AllocationEntry] {
        &self.0
    }

    /// Number of entries (not packs) in the plan.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the plan ships nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total items shipped across all entries.
    pub fn total_items(&self) -> u128 {
        self.0.iter().map(AllocationEntry::items).sum()
    }

    /// Total physical packs shipped across all entries.
    pub fn total_packs(&self) -> u128 {
        self.0.iter().map(|entry| u128::from(entry.quantity)).sum()
    }

    /// Consolidate duplicate sizes into one entry each, largest size
    /// first. Quantity sums saturate at `u64::MAX`.
    pub fn merged(&self) -> AllocationPlan {
        let mut by_size: BTreeMap<PackSize, u64> = BTreeMap::new();
        for entry in &self.0 {
            let quantity = by_size.entry(entry.size).or_insert(0);
            *quantity = quantity.saturating_add(entry.quantity);
        }
        Self(
            by_size
                .into_iter()
                .rev()
                .map(|(size, quantity)| AllocationEntry { size, quantity })
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a AllocationPlan {
    type Item = &'a AllocationEntry;
    type IntoIter = std::slice::Iter<'a, AllocationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// -- Tests ----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(size: u64, quantity: u64) -> AllocationEntry {
        AllocationEntry {
            size: PackSize::new(size).unwrap(),
            quantity,
        }
    }

    #[test]
    fn entry_items() {
        assert_eq!(entry(500, 3).items(), 1500);
    }

    #[test]
    fn entry_items_widens_past_u64() {
        let e = entry(u64::MAX, 2);
        assert_eq!(e.items(), u128::from(u64::MAX) * 2);
    }

    #[test]
    fn entry_serializes_with_pack_field() {
        let json = serde_json::to_value(entry(250, 1)).unwrap();
        assert_eq!(json, serde_json::json!({"pack": 250, "quantity": 1}));
    }

    #[test]
    fn plan_serializes_as_bare_array() {
        let plan = AllocationPlan::from_entries(vec![entry(5000, 2), entry(250, 1)]);
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"pack": 5000, "quantity": 2},
                {"pack": 250, "quantity": 1},
            ])
        );
    }

    #[test]
    fn plan_deserialize_roundtrip() {
        let plan = AllocationPlan::from_entries(vec![entry(2000, 1), entry(250, 1)]);
        let json = serde_json::to_string(&plan).unwrap();
        let back: AllocationPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn plan_deserialize_rejects_zero_pack() {
        let result: Result<AllocationPlan, _> =
            serde_json::from_str(r#"[{"pack": 0, "quantity": 1}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn plan_totals() {
        let plan =
            AllocationPlan::from_entries(vec![entry(5000, 2), entry(2000, 1), entry(250, 1)]);
        assert_eq!(plan.total_items(), 12_250);
        assert_eq!(plan.total_packs(), 4);
        assert_eq!(plan.len(), 3);
        assert!(!plan.is_empty());
    }

    #[test]
    fn empty_plan_totals() {
        let plan = AllocationPlan::empty();
        assert_eq!(plan.total_items(), 0);
        assert_eq!(plan.total_packs(), 0);
        assert!(plan.is_empty());
    }

    #[test]
    fn plan_preserves_entry_order() {
        let plan = AllocationPlan::from_entries(vec![entry(500, 2), entry(500, 1)]);
        let quantities: Vec<u64> = plan.entries().iter().map(|e| e.quantity).collect();
        assert_eq!(quantities, vec![2, 1]);
    }

    #[test]
    fn merged_sums_duplicate_sizes() {
        let plan = AllocationPlan::from_entries(vec![entry(500, 2), entry(500, 1)]);
        let merged = plan.merged();
        assert_eq!(merged.entries(), &[entry(500, 3)]);
        assert_eq!(merged.total_items(), plan.total_items());
        assert_eq!(merged.total_packs(), plan.total_packs());
    }

    #[test]
    fn merged_orders_largest_first() {
        let plan = AllocationPlan::from_entries(vec![entry(250, 1), entry(5000, 1), entry(500, 2)]);
        let sizes: Vec<u64> = plan.merged().entries().iter().map(|e| e.size.get()).collect();
        assert_eq!(sizes, vec![5000, 500, 250]);
    }

    #[test]
    fn merged_empty_stays_empty() {
        assert!(AllocationPlan::empty().merged().is_empty());
    }

    #[test]
    fn plan_iterates_by_reference() {
        let plan = AllocationPlan::from_entries(vec![entry(2000, 1), entry(250, 1)]);
        let mut items = 0u128;
        for entry in &plan {
            items += entry.items();
        }
        assert_eq!(items, plan.total_items());
    }
}
