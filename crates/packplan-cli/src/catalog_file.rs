//! JSON catalog files and the source that reads them.
//!
//! A catalog file is a JSON object with a single `sizes` array:
//!
//! ```json
//! { "sizes": [250, 500, 1000, 2000, 5000] }
//! ```
//!
//! The file carries raw integers, not validated sizes. Validation
//! happens once, when a `Catalog` is built from the source, so a bad
//! value is reported the same way whether it arrived by flag or file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use packplan_core::{CatalogSource, SourceError};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    sizes: Vec<u64>,
}

/// A catalog source backed by a JSON file on disk.
///
/// The file is read and decoded eagerly in [`JsonCatalogSource::open`],
/// so `catalog_sizes` itself cannot fail.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
    sizes: Vec<u64>,
}

impl JsonCatalogSource {
    /// Read and decode a catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Io`] if the file cannot be read and
    /// [`SourceError::Decode`] if it is not a valid catalog document.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let path = path.into();
        let raw = fs::read_to_string(&path).map_err(|error| SourceError::Io {
            source_name: path.display().to_string(),
            error,
        })?;
        let file: CatalogFile =
            serde_json::from_str(&raw).map_err(|error| SourceError::Decode {
                source_name: path.display().to_string(),
                reason: error.to_string(),
            })?;
        Ok(Self {
            path,
            sizes: file.sizes,
        })
    }

    /// The path the catalog was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalogSource {
    fn catalog_sizes(&self) -> Result<Vec<u64>, SourceError> {
        Ok(self.sizes.clone())
    }

    fn source_name(&self) -> &str {
        "JsonCatalogSource"
    }
}

// -- Tests ----------------------------------------------------------------
