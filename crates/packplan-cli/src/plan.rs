//! `packplan plan`: compute the allocation plan for one order.
//!
//! The catalog comes from exactly one of `--sizes` (inline, comma
//! separated) or `--catalog` (a JSON file). Refused inputs, a negative
//! item count, a zero pack size, an empty catalog under the default
//! policy, exit 1 with a one-line explanation on stdout.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use packplan_core::{AllocationPlan, Allocator, Catalog, Demand, EmptyCatalogPolicy};

use crate::catalog_file::JsonCatalogSource;

/// Arguments for `packplan plan`.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Number of items ordered.
    #[arg(long, allow_negative_numbers = true)]
    pub items: i64,

    /// Pack sizes on offer, comma separated (e.g. 250,500,1000).
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<u64>>,

    /// Path to a JSON catalog file ({"sizes": [...]}).
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Merge duplicate pack sizes into one line per size.
    #[arg(long)]
    pub merge: bool,

    /// Emit the plan as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Ship nothing instead of refusing when the catalog is empty.
    #[arg(long)]
    pub allow_empty_catalog: bool,
}

pub fn run_plan(args: &PlanArgs) -> anyhow::Result<u8> {
    let catalog = match (&args.sizes, &args.catalog) {
        (Some(sizes), None) => match Catalog::from_sizes(sizes) {
            Ok(catalog) => catalog,
            Err(e) => {
                println!("FAIL: {e}");
                return Ok(1);
            }
        },
        (None, Some(path)) => {
            let source = JsonCatalogSource::open(path)
                .with_context(|| format!("opening catalog file {}", path.display()))?;
            match Catalog::from_source(&source) {
                Ok(catalog) => catalog,
                Err(e) => {
                    println!("FAIL: {e}");
                    return Ok(1);
                }
            }
        }
        _ => {
            println!("FAIL: pass exactly one of --sizes or --catalog");
            return Ok(1);
        }
    };

    let demand = match Demand::new(args.items) {
        Ok(demand) => demand,
        Err(e) => {
            println!("FAIL: {e}");
            return Ok(1);
        }
    };

    let policy = if args.allow_empty_catalog {
        EmptyCatalogPolicy::AllowUnderfulfill
    } else {
        EmptyCatalogPolicy::Reject
    };
    info!(
        demand = demand.get(),
        catalog_len = catalog.len(),
        policy = %policy,
        "planning order"
    );

    let plan = match Allocator::with_policy(policy).allocate(&catalog, demand) {
        Ok(plan) => plan,
        Err(e) => {
            println!("REFUSED: {e}");
            return Ok(1);
        }
    };
    let plan = if args.merge { plan.merged() } else { plan };

    if args.json {
        println!("{}", serde_json::to_string(&plan)?);
    } else {
        print_table(&plan);
    }
    Ok(0)
}

fn print_table(plan: &AllocationPlan) {
    println!("{:>10}  {:>10}  {:>12}", "PACK", "QUANTITY", "ITEMS");
    for entry in plan {
        println!(
            "{:>10}  {:>10}  {:>12}",
            entry.size.get(),
            entry.quantity,
            entry.items()
        );
    }
    println!(
        "{:>10}  {:>10}  {:>12}",
        "TOTAL",
        plan.total_packs(),
        plan.total_items()
    );
}

// -- Tests ----------------------------------------------------------------
