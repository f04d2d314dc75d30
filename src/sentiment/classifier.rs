//! Sentiment classification adapter.
//!
//! A [`SentimentEngine`] segments text and labels each segment. The
//! [`SentimentClassifier`] reduces those segment labels to one label per
//! comment by taking the most frequent one.

use serde::Serialize;

use crate::feedback::SentimentLabel;

/// A segment of classified text with its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledSpan {
    pub text: String,
    pub label: SentimentLabel,
}

impl LabeledSpan {
    pub fn new(text: impl Into<String>, label: SentimentLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Capability that splits text into segments and labels each one.
///
/// Implementations are constructed once and shared read-only for a whole
/// run; `annotate` must not depend on earlier calls.
pub trait SentimentEngine: Send + Sync {
    /// Returns labeled segments in text order. May be empty.
    fn annotate(&self, text: &str) -> Vec<LabeledSpan>;
}

impl<E: SentimentEngine + ?Sized> SentimentEngine for Box<E> {
    fn annotate(&self, text: &str) -> Vec<LabeledSpan> {
        (**self).annotate(text)
    }
}

/// Reduces segment labels to a single label per comment.
#[derive(Debug, Clone)]
pub struct SentimentClassifier<E> {
    engine: E,
}

impl<E: SentimentEngine> SentimentClassifier<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Returns the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Classifies a comment.
    ///
    /// Returns `NEUTRAL` when the engine finds no segments; otherwise the
    /// most frequent segment label. Ties go to the label whose first
    /// segment appears earliest in the comment.
    pub fn classify(&self, comment: &str) -> SentimentLabel {
        let spans = self.engine.annotate(comment);
        mode_label(&spans).unwrap_or(SentimentLabel::Neutral)
    }
}

/// Most frequent label among `spans`, earliest first appearance on ties.
pub fn mode_label(spans: &[LabeledSpan]) -> Option<SentimentLabel> {
    let mut tally: Vec<(SentimentLabel, usize)> = Vec::with_capacity(SentimentLabel::ALL.len());
    for span in spans {
        match tally.iter_mut().find(|(label, _)| *label == span.label) {
            Some((_, count)) => *count += 1,
            None => tally.push((span.label, 1)),
        }
    }

    let mut best: Option<(SentimentLabel, usize)> = None;
    for (label, count) in tally {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Engine that returns a fixed label sequence regardless of input.
    struct Scripted(Vec<SentimentLabel>);

    impl SentimentEngine for Scripted {
        fn annotate(&self, text: &str) -> Vec<LabeledSpan> {
            self.0
                .iter()
                .map(|label| LabeledSpan::new(text, *label))
                .collect()
        }
    }

    #[test]
    fn test_no_spans_is_neutral() {
        let classifier = SentimentClassifier::new(Scripted(vec![]));
        assert_eq!(classifier.classify(""), SentimentLabel::Neutral);
    }

    #[test]
    fn test_single_span() {
        let classifier = SentimentClassifier::new(Scripted(vec![SentimentLabel::Positive]));
        assert_eq!(classifier.classify("Great service!"), SentimentLabel::Positive);
    }

    #[test]
    fn test_mode_wins() {
        use SentimentLabel::*;
        let classifier = SentimentClassifier::new(Scripted(vec![
            Negative, Positive, Negative, VeryPositive,
        ]));
        assert_eq!(classifier.classify("x"), Negative);
    }

    #[test]
    fn test_tie_goes_to_first_seen() {
        use SentimentLabel::*;
        let spans = [
            LabeledSpan::new("a", VeryNegative),
            LabeledSpan::new("b", Positive),
            LabeledSpan::new("c", Positive),
            LabeledSpan::new("d", VeryNegative),
        ];
        assert_eq!(mode_label(&spans), Some(VeryNegative));

        let spans = [
            LabeledSpan::new("a", Neutral),
            LabeledSpan::new("b", Positive),
        ];
        assert_eq!(mode_label(&spans), Some(Neutral));
    }

    #[test]
    fn test_boxed_engine() {
        let engine: Box<dyn SentimentEngine> = Box::new(Scripted(vec![SentimentLabel::Negative]));
        let classifier = SentimentClassifier::new(engine);
        assert_eq!(classifier.classify("meh"), SentimentLabel::Negative);
    }
}
