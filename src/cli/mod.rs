//! Command-line interface for feedback-sentiment.
//!
//! Provides the `analyze` and `classify` commands.

mod commands;

pub use commands::{parse_cli, run_with_cli, AnalyzeArgs, ClassifyArgs, Cli, Commands};
