//! Feedback record types.
//!
//! A record moves through three stages: a [`RecordBuilder`] is filled in
//! while a chunk is scanned, a validated [`UnlabeledRecord`] waits for
//! classification, and a [`FeedbackRecord`] carries its sentiment label.
//! Neither validated type exposes setters.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Sentiment category assigned to a comment, from most to least positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SentimentLabel {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl SentimentLabel {
    /// All labels, most positive first.
    pub const ALL: [SentimentLabel; 5] = [
        SentimentLabel::VeryPositive,
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
        SentimentLabel::VeryNegative,
    ];

    /// Report spelling of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::VeryPositive => "VERY_POSITIVE",
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::VeryNegative => "VERY_NEGATIVE",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the five label spellings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sentiment label '{0}'")]
pub struct UnknownLabel(pub String);

impl FromStr for SentimentLabel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        SentimentLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == normalized)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Reason a scanned chunk did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordRejection {
    #[error("missing feedback id")]
    MissingId,

    #[error("missing comment for feedback #{id}")]
    MissingComment { id: u32 },

    #[error("missing feedback id and comment")]
    MissingIdAndComment,
}

/// Mutable accumulator for the fields of one feedback chunk.
///
/// Setters overwrite, so the last occurrence of a field wins.
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    id: u32,
    customer: String,
    department: String,
    date: String,
    comment: String,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&mut self, id: u32) -> &mut Self {
        self.id = id;
        self
    }

    pub fn customer(&mut self, customer: impl Into<String>) -> &mut Self {
        self.customer = customer.into();
        self
    }

    pub fn department(&mut self, department: impl Into<String>) -> &mut Self {
        self.department = department.into();
        self
    }

    pub fn date(&mut self, date: impl Into<String>) -> &mut Self {
        self.date = date.into();
        self
    }

    pub fn comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = comment.into();
        self
    }

    /// Validates the accumulated fields.
    ///
    /// # Errors
    ///
    /// Returns a [`RecordRejection`] naming the missing field(s) when the id
    /// is zero or the comment is empty.
    pub fn build(&self) -> Result<UnlabeledRecord, RecordRejection> {
        match (self.id > 0, !self.comment.is_empty()) {
            (true, true) => Ok(UnlabeledRecord {
                id: self.id,
                customer: self.customer.clone(),
                department: self.department.clone(),
                date: self.date.clone(),
                comment: self.comment.clone(),
            }),
            (false, true) => Err(RecordRejection::MissingId),
            (true, false) => Err(RecordRejection::MissingComment { id: self.id }),
            (false, false) => Err(RecordRejection::MissingIdAndComment),
        }
    }
}

/// A validated record that has not been classified yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlabeledRecord {
    id: u32,
    customer: String,
    department: String,
    date: String,
    comment: String,
}

impl UnlabeledRecord {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Attaches a sentiment label, producing the final record.
    pub fn label(self, sentiment: SentimentLabel) -> FeedbackRecord {
        FeedbackRecord {
            id: self.id,
            customer: self.customer,
            department: self.department,
            date: self.date,
            comment: self.comment,
            sentiment,
        }
    }
}

/// A classified feedback entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackRecord {
    id: u32,
    customer: String,
    department: String,
    date: String,
    comment: String,
    sentiment: SentimentLabel,
}

impl FeedbackRecord {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Date exactly as written in the source file.
    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn sentiment(&self) -> SentimentLabel {
        self.sentiment
    }
}
