//! Simplified sort implementation in Rust
//!
//! This crate provides a line-oriented sorting utility covering a useful
//! subset of the classic `sort` command: whole-line or single-column keys,
//! lexicographic, numeric, human-readable size and month-name comparison
//! modes, reverse ordering, duplicate removal, and a sorted-order check mode.
//!
//! Comparison modes combine into a fixed dominance hierarchy
//! (month > human-size > numeric > text); values a mode fails to recognize
//! always order after recognized ones within their tier.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod field;
pub mod input;
pub mod key;
pub mod parse;
pub mod sorter;

// Re-export commonly used types
pub use config::SortConfig;
pub use error::{SortError, SortResult};
pub use sorter::{check_sorted, sort_lines, CheckOutcome};

/// Exit codes matching GNU sort
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Read the given files (stdin when empty or `-`) and sort their lines
/// according to `config`.
pub fn sort(config: &SortConfig, input_files: &[String]) -> SortResult<Vec<String>> {
    config.validate()?;
    let lines = input::read_lines(input_files)?;
    Ok(sorter::sort_lines(&lines, config))
}

/// Read the given files (stdin when empty or `-`) and check whether their
/// lines are already ordered according to `config`.
pub fn check(config: &SortConfig, input_files: &[String]) -> SortResult<CheckOutcome> {
    config.validate()?;
    let lines = input::read_lines(input_files)?;
    Ok(sorter::check_sorted(&lines, config))
}
