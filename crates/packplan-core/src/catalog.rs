//! # Pack Sizes & Catalog Normalization
//!
//! Newtypes for the catalog domain. [`PackSize`] is a validated
//! items-per-pack count, and [`Catalog`] is the strictly descending,
//! duplicate-free sequence of sizes the allocator walks.
//!
//! ## Validation
//!
//! [`PackSize`] is validated to hold at least one item at construction
//! time. [`Catalog`] construction sorts descending and drops duplicate
//! sizes, so downstream code can rely on a strict ordering without
//! re-checking it. An empty catalog is representable; what it means for
//! allocation is the allocator's policy decision, not the catalog's.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, PackplanError};
use crate::source::CatalogSource;

// -- Validating Deserialize for PackSize ---------------------------------------

impl<'de> Deserialize<'de> for PackSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u64::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A pack size: the number of items contained in one indivisible pack.
///
/// # Validation
///
/// Must be at least 1. A zero-item pack can never make progress against
/// an order and is rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PackSize(u64);

impl PackSize {
    /// Create a pack size, validating that it holds at least one item.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPackSize`] if `value` is zero.
    pub fn new(value: u64) -> Result<Self, CatalogError> {
        if value == 0 {
            return Err(CatalogError::InvalidPackSize { value });
        }
        Ok(Self(value))
    }

    /// The number of items per pack.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PackSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// -- Normalizing Deserialize for Catalog ----------------------------------------

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let sizes = Vec::<PackSize>::deserialize(deserializer)?;
        Ok(Self::new(sizes))
    }
}

/// The ordered catalog of pack sizes on offer.
///
/// Construction normalizes: sizes are sorted strictly descending and
/// duplicates are dropped, so the first element is always the largest
/// pack and the last the smallest. The allocator depends on this
/// ordering and never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog(Vec<PackSize>);

impl Catalog {
    /// Build a catalog from validated sizes, normalizing the order.
    ///
    /// Sorts strictly descending and drops duplicate sizes. Catalog
    /// stores keep sizes unique already; deduplicating here makes the
    /// strict ordering unconditional rather than assumed.
    pub fn new(sizes: impl IntoIterator<Item = PackSize>) -> Self {
        let mut sizes: Vec<PackSize> = sizes.into_iter().collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        sizes.dedup();
        Self(sizes)
    }

    /// Build a catalog from raw integers, validating each value.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidPackSize`] for the first zero value
    /// encountered.
    pub fn from_sizes(raw: &[u64]) -> Result<Self, CatalogError> {
        let sizes = raw
            .iter()
            .map(|&value| PackSize::new(value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(sizes))
    }

    /// Build a catalog by pulling raw sizes from a [`CatalogSource`].
    ///
    /// # Errors
    ///
    /// Returns [`PackplanError::Source`] if the source fails to produce
    /// its list, or [`PackplanError::Catalog`] if any produced value is
    /// invalid.
    pub fn from_source(source: &dyn CatalogSource) -> Result<Self, PackplanError> {
        let raw = source.catalog_sizes()?;
        Ok(Self::from_sizes(&raw)?)
    }

    /// The sizes in strictly descending order.
    pub fn sizes(&self) -> &[PackSize] {
        &self.0
    }

    /// Number of distinct sizes on offer.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog offers no sizes at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The largest pack on offer, if any.
    pub fn largest(&self) -> Option<PackSize> {
        self.0.first().copied()
    }

    /// The smallest pack on offer, if any.
    pub fn smallest(&self) -> Option<PackSize> {
        self.0.last().copied()
    }
}

// -- Tests ----------------------------------------------------------------
