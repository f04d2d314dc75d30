//! Feedback analysis pipeline.
//!
//! A run is strictly sequential:
//!
//! 1. **Read**: the whole feedback file is loaded; failure aborts the run
//! 2. **Parse**: the text is split into records, invalid chunks are skipped
//! 3. **Classify**: each comment is labeled by the shared classifier
//! 4. **Report**: statistics and records are rendered and written out
//!
//! # Example
//!
//! ```
//! use feedback_sentiment::feedback::SentimentLabel;
//! use feedback_sentiment::pipeline::FeedbackPipeline;
//! use feedback_sentiment::sentiment::LexiconEngine;
//!
//! let pipeline = FeedbackPipeline::new(LexiconEngine::new());
//! let outcome = pipeline.analyze_text("Feedback #1\nComment: Excellent service.\n");
//!
//! assert_eq!(outcome.records.len(), 1);
//! assert_eq!(outcome.records[0].sentiment(), SentimentLabel::VeryPositive);
//! ```

pub mod runner;

pub use runner::{AnalysisOutcome, FeedbackPipeline, PipelineSummary};
