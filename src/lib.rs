/// This crate is an assignment plagiarism checker using a TF-IDF Vectorizer.
pub mod analyzer;
pub mod checker;
pub mod config;
pub mod corpus;
pub mod error;
pub mod report;
pub mod shell;
pub mod upload;
pub mod utils;
pub mod vectorizer;

/// Corpus (session store)
/// Holds the submission text and the reference documents of one session.
/// Nothing is persisted; the interface layer owns the instance and mutates it
/// through `set_submission`, `add_reference`, `add_pasted_reference` and
/// `clear_references`.
pub use corpus::{Corpus, Document};

/// Similarity Engine
/// `compute_similarities` builds one TF-IDF vector space over the submission and
/// all references, then scores the submission against each reference with
/// cosine similarity. Results are sorted by score, highest first.
///
/// `SimilarityResult` carries the reference name and the raw score in `[0, 1]`.
pub use vectorizer::similarity::{compute_similarities, max_score, SimilarityResult};

/// TF-IDF Vectorizer
/// The vector space behind `compute_similarities`.
/// Generic over the parameter type (`f32`, `f64`), the TF-IDF engine and the
/// comparison.
pub use vectorizer::TFIDFVectorizer;

/// TF IDF Calculation Engine Trait
/// A default implementation, `DefaultTFIDFEngine`, uses raw counts, smoothed
/// IDF and L2-normalized rows.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine, TFIDFVector};

/// Token Frequency structure
/// Counts token occurrences within one document, keeping first-appearance order.
pub use vectorizer::token::TokenFrequency;

/// Text Analyzer
/// `analyze` derives word count, sentence count (terminal punctuation),
/// Flesch–Kincaid grade and the top key terms from the submission.
pub use analyzer::{analyze, AnalysisSummary};

/// Report Assembler
/// `build_report` renders the plain-text report offered as
/// `plagiarism_report.txt`. `Classification` labels the highest score.
pub use report::{build_report, Classification, Report, REPORT_FILE_NAME};

pub use checker::{run, CheckOutcome};
pub use config::CheckerConfig;
pub use error::{CheckError, Result};
