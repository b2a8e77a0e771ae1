//! # packplan-cli: Command-Line Front End
//!
//! Subcommand handlers for the `packplan` binary. Each handler takes
//! its clap arguments struct and returns the process exit code: 0 on
//! success, 1 when an input is refused on its merits. Operational
//! failures (unreadable files, broken pipes) propagate as errors and
//! the binary maps them to exit code 2.

pub mod catalog_file;
pub mod check;
pub mod plan;
