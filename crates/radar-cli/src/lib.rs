//! Radar CLI - file dependency graphs and change blast radius.
//!
//! This crate provides the command-line interface over `radar-graph`: it scans
//! a repository, builds the file-level import graph and reports either the
//! graph itself or the set of files affected by a change.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`config`] - Layered configuration (defaults, `radar.toml`, `RADAR_*`, flags)
//! - [`error`] - Error types with actionable hints
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status lines and summaries on stderr
//! - `commands` - The `graph` and `impact` commands
//!
//! # Example
//!
//! ```rust
//! use radar_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
