// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
pub use spices_stats_engine::config::{Config, ConfigBuilder};
use std::path::PathBuf;

/// Everything one invocation needs: where to look and how to count.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub root_folder: PathBuf,
    pub counter: Config,
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        // extension and folder lists are fixed; nothing on the command line touches them
        Self {
            root_folder: args.root_folder,
            counter: Config::default(),
        }
    }
}

impl RunConfig {
    /// Check that the root exists and is a directory.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRoot`] otherwise.
    pub fn validate(&self) -> Result<()> {
        if self.root_folder.is_dir() {
            Ok(())
        } else {
            Err(AppError::InvalidRoot(self.root_folder.clone()))
        }
    }
}
