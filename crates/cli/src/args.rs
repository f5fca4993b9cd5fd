// crates/cli/src/args.rs
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "spices_stats",
    version = crate::VERSION,
    about = "Count source lines and files under a project folder"
)]
pub struct Args {
    /// Project folder to scan, e.g. C:/Projects/MyRepo
    #[arg(
        long = "rootFolder",
        value_name = "PATH",
        value_hint = ValueHint::DirPath
    )]
    pub root_folder: PathBuf,
}
