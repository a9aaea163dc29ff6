use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    analyzer::{analyze_with_top_terms, AnalysisSummary},
    config::CheckerConfig,
    corpus::{Corpus, Document},
    error::Result,
    report::{build_report, Classification},
    vectorizer::similarity::{compute_similarities, max_score, SimilarityResult},
};

/// Outcome of one similarity check
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckOutcome {
    /// sorted by score, highest first
    pub results: Vec<SimilarityResult>,
    pub max_score: f64,
    pub classification: Classification,
    pub summary: AnalysisSummary,
}

impl CheckOutcome {
    /// plain-text report for download
    pub fn report_text(&self) -> String {
        build_report(&self.results, &self.summary)
    }

    /// Results at or above the highlight threshold.
    /// Classification is not affected by the threshold.
    pub fn highlighted<'a>(&'a self, config: &'a CheckerConfig) -> impl Iterator<Item = &'a SimilarityResult> + 'a {
        self.results
            .iter()
            .filter(move |r| r.score >= config.highlight_score())
    }
}

/// Run the similarity check and the submission analysis over `corpus`.
///
/// Blank submissions and empty reference lists stop the run before any
/// vectorization, with [`crate::CheckError::MissingSubmission`] /
/// [`crate::CheckError::MissingReferences`]. References whose text is blank
/// are skipped; if none are left the run fails with
/// [`crate::CheckError::MissingReferences`].
#[tracing::instrument(skip_all, fields(references = corpus.reference_num()))]
pub fn run(corpus: &Corpus, config: &CheckerConfig) -> Result<CheckOutcome> {
    let references = scorable_references(corpus.references());
    let results = compute_similarities(corpus.submission(), &references).map_err(|e| {
        warn!(error = %e, "check blocked");
        e
    })?;
    let max_score = max_score(&results);
    let classification = Classification::from_max_score(max_score);
    let summary = analyze_with_top_terms(corpus.submission(), config.top_terms);
    info!(max_score, %classification, "check finished");

    Ok(CheckOutcome {
        results,
        max_score,
        classification,
        summary,
    })
}

/// References with non-blank text, in corpus order
fn scorable_references(references: &[Document]) -> Vec<Document> {
    references
        .iter()
        .filter(|doc| {
            let blank = doc.text.trim().is_empty();
            if blank {
                warn!(reference = %doc.name, "skipping blank reference");
            }
            !blank
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CheckError;

    #[test]
    fn blocked_without_submission() {
        let mut corpus = Corpus::new();
        corpus.add_reference("r", "text");
        let err = run(&corpus, &CheckerConfig::default()).unwrap_err();
        assert!(matches!(err, CheckError::MissingSubmission));
        assert!(err.is_missing_input());
    }

    #[test]
    fn blocked_without_references() {
        let mut corpus = Corpus::new();
        corpus.set_submission("my essay");
        let err = run(&corpus, &CheckerConfig::default()).unwrap_err();
        assert!(matches!(err, CheckError::MissingReferences));
    }

    #[test]
    fn blank_references_are_not_scored() {
        let mut corpus = Corpus::new();
        corpus.set_submission("apple banana");
        corpus.add_reference("empty.txt", "");
        corpus.add_reference("fruit.txt", "apple cherry");
        corpus.add_reference("blank.txt", "   \n\t");
        let outcome = run(&corpus, &CheckerConfig::default()).unwrap();
        let names: Vec<&str> = outcome.results.iter().map(|r| r.reference_name.as_str()).collect();
        assert_eq!(names, vec!["fruit.txt"]);
        assert!(outcome.max_score > 0.0);
    }

    #[test]
    fn only_blank_references_block_the_run() {
        let mut corpus = Corpus::new();
        corpus.set_submission("apple banana");
        corpus.add_reference("empty.txt", "");
        corpus.add_reference("blank.txt", "   ");
        let err = run(&corpus, &CheckerConfig::default()).unwrap_err();
        assert!(matches!(err, CheckError::MissingReferences));
    }

    #[test]
    fn copied_submission_is_high() {
        let text = "Mitochondria produce energy through cellular respiration in eukaryotic cells.";
        let mut corpus = Corpus::new();
        corpus.set_submission(text);
        corpus.add_reference("source.txt", text);
        corpus.add_reference("other.txt", "Volcanic eruptions reshape coastal landscapes.");
        let outcome = run(&corpus, &CheckerConfig::default()).unwrap();
        assert_eq!(outcome.classification, Classification::High);
        assert_eq!(outcome.results[0].reference_name, "source.txt");
        assert_eq!(outcome.summary.sentence_count, 1);
        assert!(outcome.report_text().contains("source.txt - 100.0%"));
    }

    #[test]
    fn threshold_only_marks_results() {
        let mut corpus = Corpus::new();
        corpus.set_submission("rust ownership borrowing lifetimes traits");
        corpus.add_reference("mid", "rust traits generics macros");
        let config = CheckerConfig::builder().highlight_threshold(0).build().unwrap();
        let outcome = run(&corpus, &config).unwrap();
        assert_eq!(outcome.classification, Classification::Low);
        assert_eq!(outcome.highlighted(&config).count(), 1);
    }

    #[test]
    fn top_terms_follow_config() {
        let mut corpus = Corpus::new();
        corpus.set_submission("alpha beta gamma delta");
        corpus.add_reference("r", "alpha");
        let config = CheckerConfig::builder().top_terms(2).build().unwrap();
        let outcome = run(&corpus, &config).unwrap();
        assert_eq!(outcome.summary.key_terms, vec!["alpha", "beta"]);
    }
}
