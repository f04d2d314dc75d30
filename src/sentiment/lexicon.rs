//! Lexicon-based sentiment engine.
//!
//! Splits text into sentences and scores each one against a retail
//! feedback word list, with negation flipping and intensifier scaling.
//! The mean word score of a sentence is bucketed into a
//! [`SentimentLabel`].

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::classifier::{LabeledSpan, SentimentEngine};
use crate::feedback::SentimentLabel;

static SENTENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?\n]+[.!?]*").expect("sentence pattern is valid"));
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+(?:'[a-z]+)?").expect("word pattern is valid"));

/// Scores at or above this are `VERY_POSITIVE`.
pub const VERY_POSITIVE_THRESHOLD: f64 = 0.6;
/// Scores at or above this are at least `POSITIVE`.
pub const POSITIVE_THRESHOLD: f64 = 0.15;
/// Scores at or below this are at most `NEGATIVE`.
pub const NEGATIVE_THRESHOLD: f64 = -0.15;
/// Scores at or below this are `VERY_NEGATIVE`.
pub const VERY_NEGATIVE_THRESHOLD: f64 = -0.6;

/// Maps a sentence score in `[-1.0, 1.0]` to a label.
pub fn label_for_score(score: f64) -> SentimentLabel {
    if score >= VERY_POSITIVE_THRESHOLD {
        SentimentLabel::VeryPositive
    } else if score >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if score <= VERY_NEGATIVE_THRESHOLD {
        SentimentLabel::VeryNegative
    } else if score <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Rule-based engine over a fixed word list.
#[derive(Debug, Clone)]
pub struct LexiconEngine {
    words: HashMap<&'static str, f64>,
    negations: Vec<&'static str>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for LexiconEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconEngine {
    /// Creates an engine with the built-in retail feedback lexicon.
    pub fn new() -> Self {
        let positive = [
            ("outstanding", 0.85),
            ("excellent", 0.8),
            ("amazing", 0.8),
            ("fantastic", 0.8),
            ("wonderful", 0.8),
            ("perfect", 0.8),
            ("best", 0.75),
            ("great", 0.7),
            ("love", 0.7),
            ("loved", 0.7),
            ("happy", 0.6),
            ("pleased", 0.55),
            ("recommend", 0.55),
            ("good", 0.5),
            ("helpful", 0.5),
            ("friendly", 0.5),
            ("satisfied", 0.5),
            ("knowledgeable", 0.5),
            ("courteous", 0.5),
            ("nice", 0.45),
            ("polite", 0.45),
            ("convenient", 0.45),
            ("efficient", 0.45),
            ("fast", 0.4),
            ("quick", 0.4),
            ("clean", 0.4),
            ("easy", 0.4),
            ("fresh", 0.4),
            ("affordable", 0.4),
            ("thanks", 0.3),
            ("thank", 0.3),
        ];

        let negative = [
            ("worst", -0.9),
            ("terrible", -0.85),
            ("horrible", -0.85),
            ("awful", -0.8),
            ("unacceptable", -0.75),
            ("hate", -0.75),
            ("rude", -0.7),
            ("angry", -0.65),
            ("disappointed", -0.6),
            ("disappointing", -0.6),
            ("frustrated", -0.6),
            ("frustrating", -0.6),
            ("broken", -0.6),
            ("damaged", -0.6),
            ("waste", -0.6),
            ("poor", -0.55),
            ("unhelpful", -0.55),
            ("bad", -0.5),
            ("dirty", -0.5),
            ("overpriced", -0.5),
            ("wrong", -0.45),
            ("problem", -0.45),
            ("slow", -0.4),
            ("late", -0.4),
            ("missing", -0.4),
            ("confusing", -0.4),
            ("complaint", -0.4),
            ("expensive", -0.35),
            ("issue", -0.35),
            ("crowded", -0.3),
            ("cold", -0.3),
        ];

        let negations = vec![
            "not", "no", "never", "nothing", "none", "nobody", "cannot", "can't", "cant",
            "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "won't", "wont",
            "wouldn't", "isn't", "isnt", "aren't", "wasn't", "wasnt", "weren't", "hardly",
            "barely",
        ];

        let intensifiers = [
            ("very", 1.5),
            ("really", 1.4),
            ("extremely", 2.0),
            ("incredibly", 1.8),
            ("super", 1.5),
            ("so", 1.3),
            ("quite", 1.2),
            ("slightly", 0.5),
            ("somewhat", 0.7),
            ("bit", 0.6),
        ];

        Self {
            words: positive.into_iter().chain(negative).collect(),
            negations,
            intensifiers: intensifiers.into_iter().collect(),
        }
    }

    /// Scores one sentence as the mean of its matched word scores.
    ///
    /// A negation flips the next matched word; an intensifier scales it.
    /// Each word score is clamped to `[-1.0, 1.0]`. Returns `0.0` when no
    /// word matches.
    pub fn score_sentence(&self, sentence: &str) -> f64 {
        let lowered = sentence.to_lowercase();
        let mut total = 0.0;
        let mut matched = 0usize;
        let mut negate_next = false;
        let mut multiplier = 1.0;

        for word in WORD_REGEX.find_iter(&lowered).map(|m| m.as_str()) {
            if self.negations.iter().any(|negation| *negation == word) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.intensifiers.get(word) {
                multiplier = *mult;
                continue;
            }

            if let Some(base) = self.words.get(word) {
                let mut score = base * multiplier;
                if negate_next {
                    score = -score;
                    negate_next = false;
                }
                multiplier = 1.0;
                total += score.clamp(-1.0, 1.0);
                matched += 1;
            }
        }

        if matched == 0 {
            0.0
        } else {
            total / matched as f64
        }
    }
}

impl SentimentEngine for LexiconEngine {
    fn annotate(&self, text: &str) -> Vec<LabeledSpan> {
        SENTENCE_REGEX
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|sentence| sentence.chars().any(char::is_alphanumeric))
            .map(|sentence| LabeledSpan::new(sentence, label_for_score(self.score_sentence(sentence))))
            .collect()
    }
}
