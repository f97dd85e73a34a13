//! Formatting utilities for durations and command summaries.

use console::Term;
use super::paint;
use owo_colors::Style;
use radar_graph::{BuildResult, ScanOutcome};
use std::time::Duration;

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use radar_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

fn rule() -> String {
    let width = Term::stderr().size().1 as usize;
    "─".repeat(width.clamp(20, 80))
}

/// Print the `graph` summary table to stderr.
pub fn print_graph_summary(scan: &ScanOutcome, result: &BuildResult, elapsed: Duration) {
    let rows = graph_summary_rows(scan, result);

    eprintln!("\n{}", paint("Graph Summary", Style::new().bold().underline()));
    eprintln!("{}", rule());
    for (label, value) in &rows {
        eprintln!(
            "  {} {:<12} {}",
            paint("▸", Style::new().blue()),
            label,
            paint(value, Style::new().bright_white().bold())
        );
    }
    eprintln!("{}", rule());
    let green = Style::new().green();
    eprintln!(
        "  {} {} files, {} edges in {}",
        paint("Total:", Style::new().bold()),
        paint(result.graph.node_count(), green),
        paint(result.graph.edge_count(), green),
        paint(format_duration(elapsed), green)
    );
}

fn graph_summary_rows(scan: &ScanOutcome, result: &BuildResult) -> Vec<(&'static str, String)> {
    let scanned = if scan.capped() {
        format!("{} (capped from {})", scan.files.len(), scan.total)
    } else {
        scan.files.len().to_string()
    };

    vec![
        ("Scanned", scanned),
        ("Parsed", result.stats.parsed_files.to_string()),
        ("Nodes", result.graph.node_count().to_string()),
        ("Edges", result.graph.edge_count().to_string()),
        ("External", result.stats.external_imports.to_string()),
        ("Unresolved", result.stats.unresolved_imports.to_string()),
    ]
}

/// Print the `impact` totals to stderr.
pub fn print_impact_summary(changed: usize, impacted: usize, max_depth: usize, elapsed: Duration) {
    eprintln!("{}", rule());
    eprintln!(
        "  {} {} files depend on {} changed (max depth {}) in {}",
        paint("Total:", Style::new().bold()),
        paint(impacted, Style::new().green()),
        changed,
        max_depth,
        paint(format_duration(elapsed), Style::new().dimmed())
    );
}
