use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    analyzer::AnalysisSummary,
    error::{CheckError, Result},
    utils::{format_float, round_to},
    vectorizer::similarity::{max_score, SimilarityResult},
};

/// Suggested file name of the downloadable report
pub const REPORT_FILE_NAME: &str = "plagiarism_report.txt";

pub const REPORT_HEADER: &str = "📋 Plagiarism Report";

/// Score cutoffs of the classification policy
pub const HIGH_SIMILARITY: f64 = 0.75;
pub const MODERATE_SIMILARITY: f64 = 0.40;

/// Display label for the highest similarity of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    High,
    Moderate,
    Low,
}

impl Classification {
    /// `>= 0.75` High, `>= 0.40` Moderate, otherwise Low
    pub fn from_max_score(max_score: f64) -> Self {
        if max_score >= HIGH_SIMILARITY {
            Classification::High
        } else if max_score >= MODERATE_SIMILARITY {
            Classification::Moderate
        } else {
            Classification::Low
        }
    }

    /// Classify a result set; an empty set counts as `0.0`
    pub fn from_results(results: &[SimilarityResult]) -> Self {
        Self::from_max_score(max_score(results))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::High => "high similarity",
            Classification::Moderate => "moderate",
            Classification::Low => "low",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Classification::High => "⚠ High similarity detected. Possible plagiarism.",
            Classification::Moderate => "⚠ Moderate similarity. Review suggested.",
            Classification::Low => "✅ Low similarity. Content likely original.",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `score * 100` rounded to 2 decimals, e.g. `85.71`, `100.0`
pub fn format_percent(score: f64) -> String {
    format_float(round_to(score * 100.0, 2))
}

/// Similarity results plus the submission summary, borrowed for rendering
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Report<'a> {
    pub results: &'a [SimilarityResult],
    pub summary: &'a AnalysisSummary,
}

impl<'a> Report<'a> {
    pub fn new(results: &'a [SimilarityResult], summary: &'a AnalysisSummary) -> Self {
        Self { results, summary }
    }
}

/// Plain-text form.
///
/// ```text
/// 📋 Plagiarism Report
///
/// essay.txt - 85.71%
/// notes.txt - 12.5%
///
/// Readability Grade Level: 8.2
/// Key Terms: energy, plants, light
/// ```
///
/// Results are written in the given order.
impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{REPORT_HEADER}\n\n")?;
        for result in self.results {
            writeln!(f, "{} - {}%", result.reference_name, format_percent(result.score))?;
        }
        write!(
            f,
            "\nReadability Grade Level: {}\nKey Terms: {}",
            format_float(self.summary.readability_grade),
            self.summary.key_terms.join(", ")
        )
    }
}

/// Render the plain-text report, see [`Report`]
pub fn build_report(results: &[SimilarityResult], summary: &AnalysisSummary) -> String {
    Report::new(results, summary).to_string()
}

/// Write a rendered report to `path`
pub fn write_report(path: impl AsRef<Path>, report: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, report).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = report.len(), "report written");
    Ok(())
}
