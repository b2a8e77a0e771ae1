//! # Order Demand
//!
//! [`Demand`] is the validated item count an order asks for. Order
//! intake hands us signed integers, so validation happens on `i64` and
//! the stored value is the proven-non-negative `u64`. Zero is a valid
//! demand and allocates to an empty plan.

use serde::{Deserialize, Serialize};

use crate::error::DemandError;

impl<'de> Deserialize<'de> for Demand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

/// A validated order demand: how many items the customer ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Demand(u64);

impl Demand {
    /// Validate a signed item count from order intake.
    ///
    /// # Errors
    ///
    /// Returns [`DemandError::Negative`] if `value` is below zero.
    pub fn new(value: i64) -> Result<Self, DemandError> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| DemandError::Negative { value })
    }

    /// Build a demand from an item count that is non-negative by type.
    pub fn from_items(items: u64) -> Self {
        Self(items)
    }

    /// The number of items ordered.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Whether the order asks for nothing at all.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Demand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// -- Tests ----------------------------------------------------------------
