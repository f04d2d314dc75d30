//! Error types for feedback analysis runs.
//!
//! Only failures that abort a run live here:
//! - Reading the feedback input file
//! - Writing the report
//! - Invalid run configuration
//!
//! Per-record problems are not errors at this level; see
//! [`RecordRejection`](crate::feedback::RecordRejection).

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort a feedback analysis run.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Failed to read feedback file '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report to '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias for run-level operations.
pub type Result<T> = std::result::Result<T, FeedbackError>;
