//! Terminal output helpers.
//!
//! Status lines and summaries go to stderr so that stdout stays free for
//! data (`impact` listings, JSON reports).
//!
//! ```no_run
//! use radar_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Graph built");
//! ui::warning("maxDepth 40 is outside 1..=12, using 12");
//! ```

mod format;
mod messages;

use owo_colors::{OwoColorize, Style};
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, print_graph_summary, print_impact_summary};
pub use messages::{debug, info, success, warning};

static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, falls back to whether stderr is
/// attended.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr() && !is_ci()
}

/// Initialize color support from `--no-color` and the environment.
///
/// Applies to both `console` styling and the status lines printed here.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    COLORS_ENABLED.store(enabled, Ordering::Relaxed);
    if !enabled {
        console::set_colors_enabled_stderr(false);
    }
}

/// Render `value` with `style`, or plain when colors are off.
pub(crate) fn paint(value: impl Display, style: Style) -> String {
    if COLORS_ENABLED.load(Ordering::Relaxed) {
        value.style(style).to_string()
    } else {
        value.to_string()
    }
}
