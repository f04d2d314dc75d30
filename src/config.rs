//! Run configuration for the feedback analyzer.
//!
//! A run reads exactly one feedback file and writes exactly one report.
//! Both paths have defaults and can be overridden from the command line
//! or the environment.

use std::path::PathBuf;

use thiserror::Error;

/// Default feedback input file.
pub const DEFAULT_INPUT_PATH: &str = "store_feedback.txt";

/// Default report output file.
pub const DEFAULT_OUTPUT_PATH: &str = "sentiment_feedback_output.txt";

/// Errors that can occur while validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed.
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration for a single analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Feedback file to read.
    pub input_path: PathBuf,
    /// Report file to (over)write.
    pub output_path: PathBuf,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the input path.
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Builder method to set the output path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` if a path is empty or the
    /// report would overwrite the input.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "input_path cannot be empty".to_string(),
            ));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "output_path cannot be empty".to_string(),
            ));
        }

        if self.input_path == self.output_path {
            return Err(ConfigError::ValidationFailed(format!(
                "output_path must differ from input_path ({})",
                self.input_path.display()
            )));
        }

        Ok(())
    }
}
