// crates/cli/src/presentation.rs
use spices_stats_engine::stats::RunTotals;

/// Render the report exactly as printed on stdout.
#[must_use]
pub fn render(totals: &RunTotals) -> String {
    format!(
        "Spices Project Statistics:\nnRows : {}\nnFiles: {}\n",
        totals.lines, totals.files
    )
}

pub fn print_results(totals: &RunTotals) {
    print!("{}", render(totals));
}
