//! End-to-end tests for the feedback pipeline.
//!
//! These drive the public API against files in a temporary directory with
//! a scripted engine, so the expected labels are known up front.

use feedback_sentiment::feedback::SentimentLabel;
use feedback_sentiment::pipeline::FeedbackPipeline;
use feedback_sentiment::sentiment::{LabeledSpan, SentimentEngine};
use feedback_sentiment::AnalyzerConfig;

/// Labels each sentence by a leading tag such as `[NEGATIVE]`; untagged
/// sentences are skipped, so untagged comments yield no spans.
struct TaggedEngine;

impl SentimentEngine for TaggedEngine {
    fn annotate(&self, text: &str) -> Vec<LabeledSpan> {
        text.split('.')
            .map(str::trim)
            .filter_map(|sentence| {
                let rest = sentence.strip_prefix('[')?;
                let (tag, body) = rest.split_once(']')?;
                let label: SentimentLabel = tag.parse().ok()?;
                Some(LabeledSpan::new(body.trim(), label))
            })
            .collect()
    }
}

const FEEDBACK: &str = "Quarterly store feedback\n\
    Exported 2024-04-01\n\
    \n\
    Feedback #1\n\
    Customer: Alice\n\
    Department: Electronics\n\
    Date: 2024-03-01\n\
    Comment: [POSITIVE] Helpful staff. [POSITIVE] Quick checkout. [NEGATIVE] Long queue.\n\
    Sentiment: VERY_NEGATIVE\n\
    \n\
    Feedback #2\n\
    Customer: Bob\n\
    Department: Grocery\n\
    Date: March 3rd\n\
    Comment: [VERY_NEGATIVE] Spoiled milk.\n\
    \n\
    Feedback #3\n\
    Customer: Carol\n\
    Department: Electronics\n\
    Date: 2024-03-05\n\
    \n\
    Feedback #4\n\
    Department: Grocery\n\
    Comment: Nothing to report\n\
    Customer: Dan\n\
    \n\
    Feedback #5\n\
    Customer: Erin\n\
    Comment: [NEGATIVE] Parking was full.\n";

fn run_pipeline(input: &str) -> (tempfile::TempDir, String, usize, usize) {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("store_feedback.txt");
    let output_path = dir.path().join("sentiment_feedback_output.txt");
    std::fs::write(&input_path, input).unwrap();

    let config = AnalyzerConfig::new()
        .with_input_path(&input_path)
        .with_output_path(&output_path);
    let summary = FeedbackPipeline::new(TaggedEngine).run(&config).unwrap();
    let report = std::fs::read_to_string(&output_path).unwrap();
    (dir, report, summary.processed, summary.skipped)
}

fn section<'a>(report: &'a str, heading: &str) -> &'a str {
    let start = report.find(heading).unwrap() + heading.len();
    let rest = &report[start..];
    match rest.find("\n## ") {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// Parses `- LABEL: count (pct%)` lines.
fn distribution_lines(text: &str) -> Vec<(String, usize, f64)> {
    text.lines()
        .filter_map(|line| line.strip_prefix("- "))
        .map(|line| {
            let (label, rest) = line.split_once(": ").unwrap();
            let (count, pct) = rest.split_once(" (").unwrap();
            let pct = pct.trim_end_matches("%)");
            (
                label.to_string(),
                count.parse().unwrap(),
                pct.parse().unwrap(),
            )
        })
        .collect()
}

#[test]
fn test_spec_example_single_record() {
    let (_dir, report, processed, skipped) = run_pipeline(
        "Feedback #1\nCustomer: A\nDepartment: Support\nDate: 2024-01-01\nComment: [POSITIVE] Great service!\n",
    );
    assert_eq!(processed, 1);
    assert_eq!(skipped, 0);
    assert!(report.contains("Total Feedback Entries: 1\nSentiment Distribution:\n- POSITIVE: 1 (100.0%)\n"));
    assert!(report.contains("### Support\n\n- POSITIVE: 1 (100.0%)\n"));
}

#[test]
fn test_detail_count_matches_valid_chunks() {
    let (_dir, report, processed, skipped) = run_pipeline(FEEDBACK);
    assert_eq!(processed, 4);
    assert_eq!(skipped, 1);

    let details = section(&report, "## Detailed Feedback Entries");
    assert_eq!(details.matches("Feedback #").count(), 4);
    assert!(!details.contains("Feedback #3"));
    assert!(!report.contains("Carol"));
}

#[test]
fn test_summary_counts_and_percentages() {
    let (_dir, report, processed, _) = run_pipeline(FEEDBACK);
    let summary = distribution_lines(section(&report, "## Summary Statistics"));

    let total: usize = summary.iter().map(|(_, count, _)| count).sum();
    assert_eq!(total, processed);

    let pct: f64 = summary.iter().map(|(_, _, pct)| pct).sum();
    assert!((pct - 100.0).abs() <= 0.1 * summary.len() as f64);

    let labels: Vec<&str> = summary.iter().map(|(label, _, _)| label.as_str()).collect();
    assert_eq!(labels, vec!["POSITIVE", "VERY_NEGATIVE", "NEUTRAL", "NEGATIVE"]);
}

#[test]
fn test_department_counts_match_group_sizes() {
    let (_dir, report, _, _) = run_pipeline(FEEDBACK);
    let departments = section(&report, "## Department Analysis");

    let groups: Vec<(&str, &str)> = departments
        .split("### ")
        .skip(1)
        .map(|block| block.split_once('\n').unwrap())
        .collect();
    let names: Vec<&str> = groups.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["Electronics", "Grocery", ""]);

    let expected_sizes = [1usize, 2, 1];
    for ((_, body), expected) in groups.iter().zip(expected_sizes) {
        let counts: usize = distribution_lines(body).iter().map(|(_, c, _)| c).sum();
        assert_eq!(counts, expected);
    }

    assert!(departments.contains("### Grocery\n\n- VERY_NEGATIVE: 1 (50.0%)\n- NEUTRAL: 1 (50.0%)\n"));
}

#[test]
fn test_recomputed_sentiment_and_neutral_default() {
    let (_dir, report, _, _) = run_pipeline(FEEDBACK);
    let details = section(&report, "## Detailed Feedback Entries");

    assert!(details.contains(
        "Feedback #1\nCustomer: Alice\nDepartment: Electronics\nDate: 2024-03-01\nComment: [POSITIVE] Helpful staff. [POSITIVE] Quick checkout. [NEGATIVE] Long queue.\nSentiment: POSITIVE\n\n"
    ));
    assert!(details.contains(
        "Feedback #4\nCustomer: Dan\nDepartment: Grocery\nDate: \nComment: Nothing to report\nSentiment: NEUTRAL\n\n"
    ));
    assert!(details.contains("Date: March 3rd\n"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let (_dir_a, first, _, _) = run_pipeline(FEEDBACK);
    let (_dir_b, second, _, _) = run_pipeline(FEEDBACK);
    assert_eq!(first, second);
}

#[test]
fn test_rerun_overwrites_existing_report() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("in.txt");
    let output_path = dir.path().join("out.txt");
    let config = AnalyzerConfig::new()
        .with_input_path(&input_path)
        .with_output_path(&output_path);
    let pipeline = FeedbackPipeline::new(TaggedEngine);

    std::fs::write(&input_path, FEEDBACK).unwrap();
    pipeline.run(&config).unwrap();

    std::fs::write(&input_path, "Feedback #9\nComment: [NEUTRAL] Fine.\n").unwrap();
    let summary = pipeline.run(&config).unwrap();
    assert_eq!(summary.processed, 1);

    let report = std::fs::read_to_string(&output_path).unwrap();
    assert!(report.contains("Total Feedback Entries: 1\n"));
    assert!(!report.contains("Alice"));
}

#[test]
fn test_non_utf8_input_is_processed() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("in.txt");
    let output_path = dir.path().join("out.txt");
    std::fs::write(
        &input_path,
        b"Feedback #1\nCustomer: Jos\xE9\nComment: [POSITIVE] Great service!\n",
    )
    .unwrap();

    let config = AnalyzerConfig::new()
        .with_input_path(&input_path)
        .with_output_path(&output_path);
    let summary = FeedbackPipeline::new(TaggedEngine).run(&config).unwrap();
    assert_eq!(summary.processed, 1);

    let report = std::fs::read_to_string(&output_path).unwrap();
    assert!(report.contains("Customer: Jos\u{FFFD}\n"));
    assert!(report.contains("- POSITIVE: 1 (100.0%)\n"));
}
