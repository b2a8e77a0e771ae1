//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout packplan. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Input validation fails at construction time, with the rejected value
//!   carried in the error.
//! - Once a [`crate::Catalog`] and [`crate::Demand`] exist, allocation
//!   itself cannot fail except for the empty-catalog case, which is
//!   governed by the allocator's policy.
//! - Messages are lowercase fragments so callers can compose them.

use thiserror::Error;

/// Top-level error type for packplan.
///
/// Callers that do not care which stage rejected their input can take
/// this one type; each stage's error converts into it.
#[derive(Error, Debug)]
pub enum PackplanError {
    /// Catalog construction or validation failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Demand validation failed.
    #[error("demand error: {0}")]
    Demand(#[from] DemandError),

    /// A catalog source could not produce its size list.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// Allocation was refused before the walk started.
    #[error("allocation error: {0}")]
    Allocate(#[from] AllocateError),
}

/// Error raised while validating raw pack sizes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A raw size held no items. Pack sizes are items-per-pack counts and
    /// a zero-item pack can never make progress against an order.
    #[error("invalid pack size {value}: a pack must hold at least one item")]
    InvalidPackSize {
        /// The rejected raw value.
        value: u64,
    },
}

/// Error raised while validating a raw demand value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DemandError {
    /// Demand was below zero. A negative item count has no defined
    /// meaning; zero is valid and allocates to an empty plan.
    #[error("invalid demand {value}: demand cannot be negative")]
    Negative {
        /// The rejected raw value.
        value: i64,
    },
}

/// Error raised when a catalog source cannot produce its size list.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source's backing store could not be read.
    #[error("catalog source {source_name}: {error}")]
    Io {
        /// Name of the failing source.
        source_name: String,
        /// The underlying read failure.
        #[source]
        error: std::io::Error,
    },

    /// The source's contents could not be decoded into raw sizes.
    #[error("catalog source {source_name}: {reason}")]
    Decode {
        /// Name of the failing source.
        source_name: String,
        /// Why decoding failed.
        reason: String,
    },
}

/// Error raised by the allocator before the walk starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocateError {
    /// The catalog offers no sizes and the demand is positive. Raised
    /// only under the strict empty-catalog policy; the permissive policy
    /// returns an empty plan instead.
    #[error("cannot allocate {demand} item(s) from an empty catalog")]
    EmptyCatalog {
        /// The demand that could not be served.
        demand: u64,
    },
}
