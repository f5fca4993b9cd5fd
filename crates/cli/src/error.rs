// crates/cli/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid argument for --rootFolder: {}", .0.display())]
    InvalidRoot(PathBuf),

    #[error(transparent)]
    Engine(#[from] spices_stats_engine::error::EngineError),
}

pub type Result<T> = std::result::Result<T, AppError>;
