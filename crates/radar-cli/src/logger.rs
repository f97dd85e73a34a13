//! Logging setup for the radar CLI.
//!
//! The library crates only emit `tracing` events; this module installs the
//! subscriber that renders them. Verbosity comes from the global flags, with
//! `RUST_LOG` as the fallback when neither is given.
//!
//! # Example
//!
//! ```rust,no_run
//! use radar_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Scanning repository");
//! debug!("Candidate: {}", "src/index.ts");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used by `--verbose`.
pub const VERBOSE_FILTER: &str = "radar=debug,radar_graph=debug,radar_cli=debug";

/// Filter used by `--quiet`.
pub const QUIET_FILTER: &str = "radar=error,radar_graph=error,radar_cli=error";

/// Filter used when no flag is given and `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "radar=info,radar_graph=info,radar_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at the start of the program, before any logging occurs.
///
/// # Verbosity Levels
///
/// 1. `--verbose`: DEBUG for radar crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`: custom filter
/// 4. Default: INFO for radar crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(select_filter(verbose, quiet), no_color);
}

/// Initialize the logger with a custom environment filter.
///
/// ```rust,no_run
/// use radar_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// init_logger_with_filter(EnvFilter::new("radar_graph=trace"), false);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal's capabilities decide.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can only be installed once per process, so these
    // tests stick to filter construction.

    #[test]
    fn test_filters_parse() {
        for directive in [VERBOSE_FILTER, QUIET_FILTER, DEFAULT_FILTER] {
            assert!(EnvFilter::try_new(directive).is_ok(), "{directive}");
        }
    }

    #[test]
    fn test_verbose_wins_over_quiet() {
        let filter = select_filter(true, true);
        assert!(filter.to_string().contains("radar_graph=debug"));
    }

    #[test]
    fn test_quiet_filter() {
        let filter = select_filter(false, true);
        assert!(filter.to_string().contains("radar_graph=error"));
    }
}
