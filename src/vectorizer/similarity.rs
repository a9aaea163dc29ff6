use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    corpus::Document,
    error::{CheckError, Result},
    vectorizer::{token::TokenFrequency, TFIDFVectorizer},
};

/// Similarity of the submission against one reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityResult {
    pub reference_name: String,
    /// raw cosine similarity in `[0, 1]`, unrounded
    pub score: f64,
}

impl SimilarityResult {
    pub fn new(reference_name: impl Into<String>, score: f64) -> Self {
        Self { reference_name: reference_name.into(), score }
    }

    /// score as a percentage rounded to 2 decimals (display only)
    pub fn percent(&self) -> f64 {
        crate::utils::round_to(self.score * 100.0, 2)
    }
}

/// Compare `submission` against every reference.
///
/// One vocabulary is built over the submission plus all reference texts
/// (English stop words excluded), every document becomes an L2-normalized
/// TF-IDF vector, and the submission vector is compared with each reference
/// vector independently. The result is sorted by score, highest first; the
/// sort is stable so equal scores keep reference order.
///
/// # Errors
/// - [`CheckError::MissingSubmission`] if `submission` is blank
/// - [`CheckError::MissingReferences`] if `references` is empty
#[tracing::instrument(skip_all, fields(references = references.len()))]
pub fn compute_similarities(submission: &str, references: &[Document]) -> Result<Vec<SimilarityResult>> {
    if submission.trim().is_empty() {
        return Err(CheckError::MissingSubmission);
    }
    if references.is_empty() {
        return Err(CheckError::MissingReferences);
    }

    let mut vectorizer: TFIDFVectorizer<f64> = TFIDFVectorizer::new();
    let query_freq = vectorizer.token_frequency(submission);
    let ref_freqs: Vec<TokenFrequency> = references
        .par_iter()
        .map(|doc| vectorizer.token_frequency(&doc.text))
        .collect();
    vectorizer.fit(std::iter::once(&query_freq).chain(ref_freqs.iter()));
    debug!(
        vocab_size = vectorizer.vocab_size(),
        doc_num = vectorizer.doc_num(),
        "vocabulary built"
    );

    let query = vectorizer.transform(&query_freq);
    let mut results: Vec<SimilarityResult> = references
        .par_iter()
        .zip(ref_freqs.par_iter())
        .map(|(doc, freq)| {
            let score = vectorizer.similarity(&query, &vectorizer.transform(freq));
            SimilarityResult::new(doc.name.clone(), score)
        })
        .collect();

    sort_by_score_desc(&mut results);
    Ok(results)
}

/// Sort results by descending score (stable)
pub fn sort_by_score_desc(results: &mut [SimilarityResult]) {
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
}

/// Highest score, or `0.0` for an empty result set
pub fn max_score(results: &[SimilarityResult]) -> f64 {
    results.iter().map(|r| r.score).fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(texts: &[(&str, &str)]) -> Vec<Document> {
        texts.iter().map(|(name, text)| Document::new(*name, *text)).collect()
    }

    #[test]
    fn identical_document_scores_one() {
        let text = "Photosynthesis converts sunlight into chemical energy inside plant cells.";
        let results = compute_similarities(text, &refs(&[("same.txt", text)])).unwrap();
        assert_eq!(results.len(), 1);
        assert!((results[0].score - 1.0).abs() < 1e-9);
        assert_eq!(results[0].percent(), 100.0);
    }

    #[test]
    fn disjoint_vocabulary_scores_zero() {
        let results = compute_similarities(
            "volcanoes erupt molten lava",
            &refs(&[("other.txt", "pianos play gentle melodies")]),
        )
        .unwrap();
        assert_eq!(results[0].score, 0.0);
    }

    #[test]
    fn only_stop_words_shared_scores_zero() {
        let results = compute_similarities(
            "the cats were there",
            &refs(&[("r", "the dogs were there")]),
        )
        .unwrap();
        assert_eq!(results[0].score, 0.0);
    }

    #[test]
    fn results_are_sorted_descending() {
        let submission = "rust ownership borrowing lifetimes traits";
        let results = compute_similarities(
            submission,
            &refs(&[
                ("far", "gardening tomatoes soil"),
                ("close", "rust ownership borrowing lifetimes"),
                ("mid", "rust traits generics macros"),
            ]),
        )
        .unwrap();
        let names: Vec<&str> = results.iter().map(|r| r.reference_name.as_str()).collect();
        assert_eq!(names, vec!["close", "mid", "far"]);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn blank_submission_is_rejected() {
        let err = compute_similarities("  \n", &refs(&[("r", "text")])).unwrap_err();
        assert!(matches!(err, CheckError::MissingSubmission));
    }

    #[test]
    fn empty_references_are_rejected() {
        let err = compute_similarities("text", &[]).unwrap_err();
        assert!(matches!(err, CheckError::MissingReferences));
    }

    #[test]
    fn max_score_defaults_to_zero() {
        assert_eq!(max_score(&[]), 0.0);
        let results = vec![SimilarityResult::new("a", 0.2), SimilarityResult::new("b", 0.8)];
        assert_eq!(max_score(&results), 0.8);
    }

    #[test]
    fn ties_keep_reference_order() {
        let mut results = vec![
            SimilarityResult::new("first", 0.5),
            SimilarityResult::new("top", 0.9),
            SimilarityResult::new("second", 0.5),
        ];
        sort_by_score_desc(&mut results);
        let names: Vec<&str> = results.iter().map(|r| r.reference_name.as_str()).collect();
        assert_eq!(names, vec!["top", "first", "second"]);
    }
}
