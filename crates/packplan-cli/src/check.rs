//! `packplan check`: lint a catalog without allocating anything.
//!
//! Reports every rejected value rather than stopping at the first,
//! then shows the normalized catalog the allocator would actually
//! walk. Exit 1 if any value was rejected or the catalog came out
//! empty.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use packplan_core::{Catalog, CatalogSource, PackSize};

use crate::catalog_file::JsonCatalogSource;

/// Arguments for `packplan check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Pack sizes to check, comma separated.
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<u64>>,

    /// Path to a JSON catalog file to check.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub fn run_check(args: &CheckArgs) -> anyhow::Result<u8> {
    let raw = match (&args.sizes, &args.catalog) {
        (Some(sizes), None) => sizes.clone(),
        (None, Some(path)) => {
            let source = JsonCatalogSource::open(path)
                .with_context(|| format!("opening catalog file {}", path.display()))?;
            source.catalog_sizes()?
        }
        _ => {
            println!("FAIL: pass exactly one of --sizes or --catalog");
            return Ok(1);
        }
    };

    let mut valid = Vec::new();
    let mut rejected = 0usize;
    for &value in &raw {
        match PackSize::new(value) {
            Ok(size) => valid.push(size),
            Err(e) => {
                println!("  FAIL: {e}");
                rejected += 1;
            }
        }
    }
    println!("Sizes: {}/{} passed", valid.len(), raw.len());

    let catalog = Catalog::new(valid);
    if catalog.is_empty() {
        println!("Catalog is empty: orders with positive demand will be refused");
        return Ok(1);
    }

    let normalized: Vec<String> = catalog.sizes().iter().map(PackSize::to_string).collect();
    println!("Normalized (descending): {}", normalized.join(", "));
    let duplicates = raw.len() - rejected - catalog.len();
    if duplicates > 0 {
        println!("Dropped {duplicates} duplicate size(s)");
    }

    if rejected > 0 {
        return Ok(1);
    }
    Ok(0)
}

// -- Tests ----------------------------------------------------------------
