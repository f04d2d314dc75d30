//! Feedback records and the parser that extracts them from text.

pub mod parser;
pub mod record;

pub use parser::{
    parse_chunk, parse_feedback, read_feedback_file, split_chunks, ParseOutcome, RECORD_MARKER,
};
pub use record::{
    FeedbackRecord, RecordBuilder, RecordRejection, SentimentLabel, UnknownLabel, UnlabeledRecord,
};
