//! Sentiment classification.
//!
//! The [`SentimentClassifier`] adapter works over any [`SentimentEngine`];
//! [`LexiconEngine`] is the built-in engine used by the CLI.

pub mod classifier;
pub mod lexicon;

pub use classifier::{mode_label, LabeledSpan, SentimentClassifier, SentimentEngine};
pub use lexicon::{label_for_score, LexiconEngine};
