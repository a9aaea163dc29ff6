//! Submission statistics: word and sentence counts, readability grade and
//! key terms.

pub mod readability;

use serde::{Deserialize, Serialize};

use crate::vectorizer::token::{word_tokens, TokenFrequency};

pub use readability::flesch_kincaid_grade;

/// Stop words removed before key-term ranking.
///
/// Kept separate from [`crate::vectorizer::stop_words::ENGLISH_STOP_WORDS`]:
/// merging the two lists would change which key terms are reported.
pub const KEY_TERM_STOP_WORDS: &[&str] = &[
    "the", "is", "and", "in", "to", "of", "that", "with", "for", "as",
    "on", "are", "was", "were", "it", "by", "an", "be", "this", "which",
    "or", "from", "a", "at", "but",
];

/// Number of key terms reported by [`analyze`]
pub const DEFAULT_TOP_TERMS: usize = 10;

/// Statistics derived from the submission text only
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSummary {
    pub word_count: usize,
    pub sentence_count: usize,
    pub readability_grade: f64,
    /// most frequent terms, highest first
    pub key_terms: Vec<String>,
}

/// Analyze `text` with the default number of key terms
pub fn analyze(text: &str) -> AnalysisSummary {
    analyze_with_top_terms(text, DEFAULT_TOP_TERMS)
}

#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn analyze_with_top_terms(text: &str, top_n: usize) -> AnalysisSummary {
    AnalysisSummary {
        word_count: word_count(text),
        sentence_count: sentence_count(text),
        readability_grade: flesch_kincaid_grade(text),
        key_terms: key_terms(text, top_n),
    }
}

/// whitespace-delimited tokens
#[inline]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of `.`, `!` and `?` characters.
/// "Wait..." counts three.
#[inline]
pub fn sentence_count(text: &str) -> usize {
    text.chars().filter(|c| matches!(c, '.' | '!' | '?')).count()
}

/// Top `top_n` lowercase word tokens by frequency, ties by first appearance
pub fn key_terms(text: &str, top_n: usize) -> Vec<String> {
    let tokens = word_tokens(text);
    let mut freq = TokenFrequency::new();
    freq.add_tokens_filtered(&tokens, |tok| !KEY_TERM_STOP_WORDS.contains(&tok));
    freq.most_frequent(top_n)
        .into_iter()
        .map(|(term, _)| term.to_string())
        .collect()
}
