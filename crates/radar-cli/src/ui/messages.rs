//! Status message functions for terminal output.

use super::paint;
use owo_colors::Style;

/// Print a success message to stderr.
pub fn success(message: &str) {
    eprintln!("{} {}", paint("✓", Style::new().green().bold()), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", paint("ℹ", Style::new().blue().bold()), message);
}

/// Print a warning message to stderr.
///
/// ```no_run
/// use radar_cli::ui::warning;
///
/// warning("Changed file is not part of the graph: docs/readme.md");
/// ```
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        paint("⚠", Style::new().yellow().bold()),
        paint(message, Style::new().yellow())
    );
}

/// Print a debug message to stderr (only if RUST_LOG is set).
pub fn debug(message: &str) {
    if std::env::var("RUST_LOG").is_ok() {
        let dim = Style::new().dimmed();
        eprintln!("{} {}", paint("◆", dim), paint(message, dim));
    }
}
