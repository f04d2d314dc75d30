//! Sequential feedback analysis pipeline.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::feedback::{parse_feedback, read_feedback_file, FeedbackRecord};
use crate::report::{write_report, SentimentDistribution};
use crate::sentiment::{SentimentClassifier, SentimentEngine};

/// Classified records from one input text.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOutcome {
    /// Classified records in input order.
    pub records: Vec<FeedbackRecord>,
    /// Chunks dropped for a missing id or comment.
    pub skipped: usize,
}

/// Result of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub status: String,
    pub input: PathBuf,
    pub output: PathBuf,
    pub processed: usize,
    pub skipped: usize,
    pub distribution: SentimentDistribution,
}

/// Reads feedback, classifies each comment and writes the report.
///
/// The classifier is built once and only borrowed afterwards, so one
/// pipeline can serve any number of runs.
pub struct FeedbackPipeline<E> {
    classifier: SentimentClassifier<E>,
}

impl<E: SentimentEngine> FeedbackPipeline<E> {
    pub fn new(engine: E) -> Self {
        Self {
            classifier: SentimentClassifier::new(engine),
        }
    }

    pub fn classifier(&self) -> &SentimentClassifier<E> {
        &self.classifier
    }

    /// Parses and classifies feedback held in memory.
    pub fn analyze_text(&self, text: &str) -> AnalysisOutcome {
        let parsed = parse_feedback(text);

        let records: Vec<FeedbackRecord> = parsed
            .records
            .into_iter()
            .map(|record| {
                info!(id = record.id(), "Analyzing sentiment for entry");
                let label = self.classifier.classify(record.comment());
                record.label(label)
            })
            .collect();

        if let Some(first) = records.first() {
            debug!(
                id = first.id(),
                customer = first.customer(),
                comment = first.comment(),
                sentiment = %first.sentiment(),
                "First entry processed"
            );
        }

        AnalysisOutcome {
            records,
            skipped: parsed.rejected,
        }
    }

    /// Runs the whole pipeline for `config`.
    ///
    /// Nothing is written unless the input was read successfully.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the input cannot
    /// be read or the report cannot be written.
    pub fn run(&self, config: &AnalyzerConfig) -> Result<PipelineSummary> {
        config.validate()?;

        info!(input = %config.input_path.display(), "Starting sentiment analysis");
        let text = read_feedback_file(&config.input_path)?;

        let outcome = self.analyze_text(&text);
        info!(
            processed = outcome.records.len(),
            skipped = outcome.skipped,
            "Processed feedback entries"
        );

        write_report(&config.output_path, &outcome.records)?;
        info!(output = %config.output_path.display(), "Report written");

        Ok(PipelineSummary {
            status: "completed".to_string(),
            input: config.input_path.clone(),
            output: config.output_path.clone(),
            processed: outcome.records.len(),
            skipped: outcome.skipped,
            distribution: SentimentDistribution::from_records(&outcome.records),
        })
    }
}
