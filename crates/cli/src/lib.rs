// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod presentation;

use crate::args::Args;
use crate::config::RunConfig;
use crate::error::Result;
use spices_stats_engine::stats::RunTotals;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validate the root folder and count everything under it.
///
/// # Errors
///
/// Returns [`error::AppError::InvalidRoot`] before any counting if the root is
/// not a directory, or the engine error that aborted the walk.
pub fn run(args: Args) -> Result<RunTotals> {
    let config = RunConfig::from(args);
    config.validate()?;
    Ok(spices_stats_engine::run(&config.root_folder, &config.counter)?)
}
