//! Report aggregation and rendering.

pub mod stats;
pub mod writer;

pub use stats::{percentage, DepartmentBreakdown, LabelCount, ReportStats, SentimentDistribution};
pub use writer::{render_report, write_report};
