use clap::Parser;
use env_logger::{Env, Target};
use spices_stats_cli::args::Args;
use spices_stats_cli::presentation;
use std::process::ExitCode;

fn main() -> ExitCode {
    // stdout carries the report; diagnostics go to stderr
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    match spices_stats_cli::run(args) {
        Ok(totals) => {
            presentation::print_results(&totals);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("run aborted: {e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
