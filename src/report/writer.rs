//! Report rendering and output.
//!
//! The report has four sections: a header, summary statistics, a
//! per-department breakdown and every record in input order:
//!
//! ```text
//! # Sentiment Analysis Results
//!
//! ## Summary Statistics
//!
//! Total Feedback Entries: 1
//! Sentiment Distribution:
//! - POSITIVE: 1 (100.0%)
//!
//! ## Department Analysis
//!
//! ### Support
//!
//! - POSITIVE: 1 (100.0%)
//!
//! ## Detailed Feedback Entries
//!
//! Feedback #1
//! Customer: A
//! Department: Support
//! Date: 2024-01-01
//! Comment: Great service!
//! Sentiment: POSITIVE
//! ```

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use super::stats::{ReportStats, SentimentDistribution};
use crate::error::{FeedbackError, Result};
use crate::feedback::FeedbackRecord;

fn push_distribution(out: &mut String, distribution: &SentimentDistribution) {
    for entry in distribution.counts() {
        let _ = writeln!(
            out,
            "- {}: {} ({:.1}%)",
            entry.label,
            entry.count,
            distribution.percentage(entry.label)
        );
    }
}

fn push_record(out: &mut String, record: &FeedbackRecord) {
    let _ = writeln!(out, "Feedback #{}", record.id());
    let _ = writeln!(out, "Customer: {}", record.customer());
    let _ = writeln!(out, "Department: {}", record.department());
    let _ = writeln!(out, "Date: {}", record.date());
    let _ = writeln!(out, "Comment: {}", record.comment());
    let _ = writeln!(out, "Sentiment: {}", record.sentiment());
    out.push('\n');
}

/// Renders the full report for `records`.
pub fn render_report(records: &[FeedbackRecord]) -> String {
    let stats = ReportStats::from_records(records);
    let mut out = String::new();

    out.push_str("# Sentiment Analysis Results\n\n");

    out.push_str("## Summary Statistics\n\n");
    let _ = writeln!(out, "Total Feedback Entries: {}", stats.overall.total());
    out.push_str("Sentiment Distribution:\n");
    push_distribution(&mut out, &stats.overall);

    out.push_str("\n## Department Analysis\n\n");
    for group in &stats.departments {
        let _ = writeln!(out, "### {}\n", group.department);
        push_distribution(&mut out, &group.distribution);
        out.push('\n');
    }

    out.push_str("## Detailed Feedback Entries\n\n");
    for record in records {
        push_record(&mut out, record);
    }

    out
}

/// Renders the report and replaces `path` with it.
///
/// The content goes to a temporary file next to `path` which is renamed
/// over the destination only once fully written.
///
/// # Errors
///
/// Returns [`FeedbackError::WriteOutput`] if the destination directory is
/// not writable or the rename fails.
pub fn write_report(path: &Path, records: &[FeedbackRecord]) -> Result<()> {
    let report = render_report(records);
    let write_err = |source: std::io::Error| FeedbackError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_err)?;
    file.write_all(report.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;
    file.persist(path).map_err(|e| write_err(e.error))?;

    debug!(path = %path.display(), bytes = report.len(), "Report written");
    Ok(())
}
