//! feedback-sentiment: sentiment analysis for customer feedback exports.
//!
//! This library parses plain-text feedback records, classifies each
//! comment into one of five sentiment categories and renders a report with
//! overall and per-department statistics.

pub mod cli;
pub mod config;
pub mod error;
pub mod feedback;
pub mod pipeline;
pub mod report;
pub mod sentiment;

pub use config::{AnalyzerConfig, ConfigError};
pub use error::FeedbackError;
pub use feedback::{FeedbackRecord, SentimentLabel};
