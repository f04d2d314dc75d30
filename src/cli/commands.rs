//! CLI command definitions for feedback-sentiment.
//!
//! `analyze` runs the full pipeline over a feedback file; `classify` labels
//! ad-hoc text with the built-in engine.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::config::{AnalyzerConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use crate::feedback::SentimentLabel;
use crate::pipeline::FeedbackPipeline;
use crate::sentiment::{LabeledSpan, LexiconEngine, SentimentEngine};

/// Customer feedback sentiment analyzer.
#[derive(Parser)]
#[command(name = "feedback-sentiment")]
#[command(about = "Classify customer feedback comments and write a sentiment report")]
#[command(version)]
#[command(
    long_about = "feedback-sentiment reads a plain-text feedback export, classifies every comment and writes a report with overall and per-department statistics.\n\nExample usage:\n  feedback-sentiment analyze --input store_feedback.txt --output sentiment_feedback_output.txt"
)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info", global = true)]
    pub log_level: String,
}

/// Available CLI subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Analyze a feedback file and write the sentiment report.
    Analyze(AnalyzeArgs),

    /// Classify text given on the command line.
    Classify(ClassifyArgs),
}

/// Arguments for `feedback-sentiment analyze`.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Feedback file to read.
    #[arg(short = 'i', long, env = "FEEDBACK_INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: String,

    /// Report file to write (replaced if it exists).
    #[arg(short = 'o', long, env = "FEEDBACK_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: String,

    /// Output JSON summary.
    #[arg(short = 'j', long)]
    pub json: bool,
}

/// Arguments for `feedback-sentiment classify`.
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Text to classify; multiple words are joined with spaces.
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Output the label and its sentence spans as JSON.
    #[arg(short = 'j', long)]
    pub json: bool,
}

/// Parse CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI with the parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Analyze(args) => run_analyze_command(args),
        Commands::Classify(args) => run_classify_command(args),
    }
}

fn run_analyze_command(args: AnalyzeArgs) -> anyhow::Result<()> {
    let config = AnalyzerConfig::new()
        .with_input_path(&args.input)
        .with_output_path(&args.output);

    info!("Initializing sentiment engine");
    let pipeline = FeedbackPipeline::new(LexiconEngine::new());

    let summary = pipeline
        .run(&config)
        .with_context(|| format!("Error processing feedback from {}", args.input))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "Sentiment analysis completed successfully. Processed {} feedback entries ({} skipped). Results written to {}",
            summary.processed,
            summary.skipped,
            summary.output.display()
        );
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize)]
struct ClassifyOutput {
    label: SentimentLabel,
    spans: Vec<LabeledSpan>,
}

fn run_classify_command(args: ClassifyArgs) -> anyhow::Result<()> {
    let text = args.text.join(" ");
    let pipeline = FeedbackPipeline::new(LexiconEngine::new());
    let label = pipeline.classifier().classify(&text);

    if args.json {
        let output = ClassifyOutput {
            label,
            spans: pipeline.classifier().engine().annotate(&text),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{label}");
    }

    Ok(())
}
