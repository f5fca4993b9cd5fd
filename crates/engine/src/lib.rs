// crates/engine/src/lib.rs
use std::path::Path;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod processor;
pub mod stats;

use crate::config::Config;
use crate::error::Result;
use crate::stats::RunTotals;

pub use crate::filesystem::walk;
pub use crate::processor::count_lines;

/// Run the line counter over `root`.
///
/// Returns the line and file totals of one full traversal.
///
/// # Errors
///
/// Fails if `root` is not a directory or if any qualifying file cannot be
/// read. No partial totals are reported on failure.
pub fn run(root: &Path, config: &Config) -> Result<RunTotals> {
    log::debug!("counting under {}", root.display());
    let totals = walk(root, config)?;
    log::info!(
        "{} lines in {} files under {}",
        totals.lines,
        totals.files,
        root.display()
    );
    Ok(totals)
}
