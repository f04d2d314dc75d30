//! Aggregate statistics over classified records.
//!
//! Label tallies and department groups are kept in first-seen order, so a
//! report over the same input is always laid out the same way.

use std::collections::HashMap;

use serde::Serialize;

use crate::feedback::{FeedbackRecord, SentimentLabel};

/// Number of records carrying one label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    pub label: SentimentLabel,
    pub count: usize,
}

/// Label tallies for a group of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    total: usize,
    counts: Vec<LabelCount>,
}

impl SentimentDistribution {
    /// Tallies the labels of `records`.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a FeedbackRecord>) -> Self {
        let mut distribution = Self::default();
        for record in records {
            distribution.add(record.sentiment());
        }
        distribution
    }

    fn add(&mut self, label: SentimentLabel) {
        self.total += 1;
        match self.counts.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.count += 1,
            None => self.counts.push(LabelCount { label, count: 1 }),
        }
    }

    /// Number of records in the group.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Labels present in the group, in first-seen order.
    pub fn counts(&self) -> &[LabelCount] {
        &self.counts
    }

    /// Count for one label, zero if absent.
    pub fn count(&self, label: SentimentLabel) -> usize {
        self.counts
            .iter()
            .find(|entry| entry.label == label)
            .map_or(0, |entry| entry.count)
    }

    /// Share of the group carrying `label`, in percent.
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        percentage(self.count(label), self.total)
    }
}

/// `100 * count / total`, or `0.0` for an empty group.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Label tallies for one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentBreakdown {
    /// Exact department string; empty for records without one.
    pub department: String,
    pub distribution: SentimentDistribution,
}

/// Overall and per-department statistics for a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    pub overall: SentimentDistribution,
    pub departments: Vec<DepartmentBreakdown>,
}

impl ReportStats {
    pub fn from_records(records: &[FeedbackRecord]) -> Self {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut departments: Vec<DepartmentBreakdown> = Vec::new();

        for record in records {
            let slot = *index.entry(record.department()).or_insert_with(|| {
                departments.push(DepartmentBreakdown {
                    department: record.department().to_string(),
                    distribution: SentimentDistribution::default(),
                });
                departments.len() - 1
            });
            departments[slot].distribution.add(record.sentiment());
        }

        Self {
            overall: SentimentDistribution::from_records(records),
            departments,
        }
    }
}
