//! # Catalog Source Abstraction
//!
//! Abstracts where raw pack sizes come from behind a trait, enabling
//! multiple backends:
//!
//! - [`StaticCatalogSource`]: fixed in-memory list for development,
//!   testing, and callers that already resolved their sizes.
//! - File- or store-backed sources live with the callers that own those
//!   inputs; they only need to satisfy the trait contract below.
//!
//! The trait hands back raw integers on purpose: validation into
//! [`PackSize`](crate::PackSize) values happens in exactly one place,
//! [`Catalog::from_source`](crate::Catalog::from_source), so a source
//! only reports what it has.

use crate::error::SourceError;

/// Trait for providers of raw candidate pack sizes.
///
/// Implementations must be `Send + Sync` so one source can be shared
/// across threads. A source does not validate its values; it reports
/// them as stored and leaves the at-least-one-item check to the catalog
/// constructor.
pub trait CatalogSource: Send + Sync {
    /// Produce the raw pack sizes currently on offer.
    fn catalog_sizes(&self) -> Result<Vec<u64>, SourceError>;

    /// Human-readable name for this source (for diagnostics/logging).
    fn source_name(&self) -> &str;
}

// -- StaticCatalogSource -------------------------------------------------

/// Fixed in-memory catalog source.
///
/// Holds a size list handed over at construction and serves it verbatim.
/// Useful in tests and for callers that already fetched their sizes.
pub struct StaticCatalogSource {
    sizes: Vec<u64>,
}

impl StaticCatalogSource {
    /// Create from a fixed size list.
    pub fn new(sizes: impl Into<Vec<u64>>) -> Self {
        Self {
            sizes: sizes.into(),
        }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn catalog_sizes(&self) -> Result<Vec<u64>, SourceError> {
        Ok(self.sizes.clone())
    }

    fn source_name(&self) -> &str {
        "StaticCatalogSource"
    }
}

// -- Tests ----------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_source_returns_sizes() {
        let source = StaticCatalogSource::new(vec![250, 500, 1000]);
        assert_eq!(source.catalog_sizes().unwrap(), vec![250, 500, 1000]);
    }

    #[test]
    fn static_source_empty_is_allowed() {
        let source = StaticCatalogSource::new(Vec::new());
        assert!(source.catalog_sizes().unwrap().is_empty());
    }

    #[test]
    fn static_source_name() {
        let source = StaticCatalogSource::new(vec![1]);
        assert_eq!(source.source_name(), "StaticCatalogSource");
    }

    #[test]
    fn static_source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StaticCatalogSource>();
    }

    #[test]
    fn catalog_source_trait_object_safe() {
        let source = StaticCatalogSource::new(vec![250]);
        let boxed: Box<dyn CatalogSource> = Box::new(source);
        assert_eq!(boxed.catalog_sizes().unwrap(), vec![250]);
    }
}
