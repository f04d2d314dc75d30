//! Feedback file parsing.
//!
//! Input is a flat text file of blocks, each introduced by a line starting
//! with `Feedback #<N>` and followed by `Label: value` lines in any order:
//!
//! ```text
//! Feedback #1
//! Customer: Jane Doe
//! Department: Electronics
//! Date: 2024-03-02
//! Comment: The staff were helpful and friendly.
//! ```
//!
//! Unknown lines (including any `Sentiment:` line already present) are
//! ignored. Chunks missing an id or a comment are logged and skipped.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};

use super::record::{RecordBuilder, RecordRejection, UnlabeledRecord};
use crate::error::{FeedbackError, Result};

/// Literal marker that opens every feedback block.
pub const RECORD_MARKER: &str = "Feedback #";

const CUSTOMER_MARKER: &str = "Customer:";
const DEPARTMENT_MARKER: &str = "Department:";
const DATE_MARKER: &str = "Date:";
const COMMENT_MARKER: &str = "Comment:";

static ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Feedback #(\d+)").expect("feedback id pattern is valid")
});

/// Records extracted from one input text.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Valid records in input order.
    pub records: Vec<UnlabeledRecord>,
    /// Number of chunks that started with the marker but failed validation.
    pub rejected: usize,
}

/// Splits text into chunks, each starting at an occurrence of `Feedback #`.
///
/// Text before the first marker becomes its own leading chunk. Chunks are
/// returned untrimmed.
pub fn split_chunks(text: &str) -> Vec<&str> {
    let mut starts: Vec<usize> = text.match_indices(RECORD_MARKER).map(|(i, _)| i).collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }

    starts
        .iter()
        .enumerate()
        .map(|(n, &start)| {
            let end = starts.get(n + 1).copied().unwrap_or(text.len());
            &text[start..end]
        })
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

/// Returns the trimmed remainder after `marker`, or `None` if the line does
/// not start with it or nothing follows.
fn marker_value<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.strip_prefix(marker)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Parses a single chunk into a validated record.
///
/// # Errors
///
/// Returns a [`RecordRejection`] if the chunk has no positive id or no
/// comment.
pub fn parse_chunk(chunk: &str) -> std::result::Result<UnlabeledRecord, RecordRejection> {
    let mut builder = RecordBuilder::new();

    for line in chunk.lines().map(str::trim) {
        if line.starts_with(RECORD_MARKER) {
            // An id too large for u32 counts as absent.
            if let Some(id) = ID_REGEX
                .captures(line)
                .and_then(|caps| caps[1].parse::<u32>().ok())
            {
                builder.id(id);
            }
        } else if let Some(value) = marker_value(line, CUSTOMER_MARKER) {
            builder.customer(value);
        } else if let Some(value) = marker_value(line, DEPARTMENT_MARKER) {
            builder.department(value);
        } else if let Some(value) = marker_value(line, DATE_MARKER) {
            builder.date(value);
        } else if let Some(value) = marker_value(line, COMMENT_MARKER) {
            builder.comment(value);
        }
    }

    builder.build()
}

/// Parses every feedback block in `text`.
///
/// Leading preamble and chunks that do not begin with the marker are
/// discarded silently; chunks that fail validation are logged and counted.
pub fn parse_feedback(text: &str) -> ParseOutcome {
    let chunks = split_chunks(text);
    let candidates = chunks
        .iter()
        .filter(|chunk| chunk.trim().starts_with(RECORD_MARKER))
        .count();
    info!(candidates, "Found potential feedback entries");

    let mut outcome = ParseOutcome::default();
    for (index, chunk) in chunks.iter().enumerate() {
        let chunk = chunk.trim();
        if chunk.is_empty() || !chunk.starts_with(RECORD_MARKER) {
            continue;
        }

        match parse_chunk(chunk) {
            Ok(record) => outcome.records.push(record),
            Err(reason) => {
                warn!(chunk = index, %reason, "Skipping invalid feedback entry");
                outcome.rejected += 1;
            }
        }
    }

    outcome
}

/// Reads a feedback file into memory.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing
/// the run.
///
/// # Errors
///
/// Returns [`FeedbackError::ReadInput`] if the file cannot be read.
pub fn read_feedback_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| FeedbackError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
