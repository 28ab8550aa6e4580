//! CLI summary formatting.
//!
//! Each builder has a `format_*` function (pure, returns the line) and a
//! `print_*` wrapper that writes to stdout. The split keeps the exact
//! user-facing wording under test without capturing stdout.

use std::path::Path;

/// One-line success summary for the carousel builder.
///
/// ```text
/// Wrote 7 slide(s) to carousel.json
/// ```
pub fn format_carousel_summary(count: usize, output: &Path) -> String {
    format!("Wrote {} slide(s) to {}", count, output.display())
}

/// Print the carousel summary to stdout.
pub fn print_carousel_summary(count: usize, output: &Path) {
    println!("{}", format_carousel_summary(count, output));
}

/// One-line success summary for the featured builder.
///
/// ```text
/// Wrote data/featured.json with 3 items.
/// ```
pub fn format_featured_summary(output: &Path, count: usize) -> String {
    format!("Wrote {} with {} items.", output.display(), count)
}

/// Print the featured summary to stdout.
pub fn print_featured_summary(output: &Path, count: usize) {
    println!("{}", format_featured_summary(output, count));
}
