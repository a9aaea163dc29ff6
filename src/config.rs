//! Checker configuration.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};
use crate::report::REPORT_FILE_NAME;

/// Env var overriding the highlight threshold (integer percent)
pub const THRESHOLD_ENV: &str = "PLAGIARISM_THRESHOLD";
/// Env var overriding the report file name
pub const REPORT_ENV: &str = "PLAGIARISM_REPORT";

/// Configuration for a checking session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckerConfig {
    /// Similarity highlight threshold in percent (0-100).
    /// Only used to mark results in the interface; classification
    /// always uses the fixed 0.75 / 0.40 cutoffs.
    pub highlight_threshold: u8,
    /// Number of key terms reported for the submission.
    pub top_terms: usize,
    /// File name of the downloadable report.
    pub report_file_name: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            highlight_threshold: 70,
            top_terms: 10,
            report_file_name: REPORT_FILE_NAME.to_string(),
        }
    }
}

impl CheckerConfig {
    /// Create a new builder for constructing a [`CheckerConfig`].
    pub fn builder() -> CheckerConfigBuilder {
        CheckerConfigBuilder::default()
    }

    /// Defaults overridden by `PLAGIARISM_THRESHOLD` / `PLAGIARISM_REPORT`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Config`] if the threshold variable is not an
    /// integer in `0..=100`.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();
        if let Ok(raw) = env::var(THRESHOLD_ENV) {
            let threshold = raw.trim().parse::<u8>().map_err(|e| {
                CheckError::Config(format!("{THRESHOLD_ENV}={raw:?} is not a percent: {e}"))
            })?;
            builder = builder.highlight_threshold(threshold);
        }
        if let Ok(name) = env::var(REPORT_ENV) {
            builder = builder.report_file_name(name);
        }
        builder.build()
    }

    /// The highlight threshold as a score in `[0, 1]`.
    pub fn highlight_score(&self) -> f64 {
        self.highlight_threshold as f64 / 100.0
    }
}

/// Builder for constructing a validated [`CheckerConfig`].
#[derive(Debug, Clone, Default)]
pub struct CheckerConfigBuilder {
    config: CheckerConfig,
}

impl CheckerConfigBuilder {
    /// Set the similarity highlight threshold in percent.
    pub fn highlight_threshold(mut self, percent: u8) -> Self {
        self.config.highlight_threshold = percent;
        self
    }

    /// Set the number of key terms to report.
    pub fn top_terms(mut self, n: usize) -> Self {
        self.config.top_terms = n;
        self
    }

    /// Set the report file name.
    pub fn report_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.report_file_name = name.into();
        self
    }

    /// Build the [`CheckerConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`CheckError::Config`] if:
    /// - `highlight_threshold > 100`
    /// - `top_terms == 0`
    /// - `report_file_name` is blank
    pub fn build(self) -> Result<CheckerConfig> {
        if self.config.highlight_threshold > 100 {
            return Err(CheckError::Config(format!(
                "highlight_threshold ({}) must be between 0 and 100",
                self.config.highlight_threshold
            )));
        }
        if self.config.top_terms == 0 {
            return Err(CheckError::Config("top_terms must be greater than zero".to_string()));
        }
        if self.config.report_file_name.trim().is_empty() {
            return Err(CheckError::Config("report_file_name must not be empty".to_string()));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_values() {
        let config = CheckerConfig::default();
        assert_eq!(config.highlight_threshold, 70);
        assert_eq!(config.top_terms, 10);
        assert_eq!(config.report_file_name, "plagiarism_report.txt");
        assert!((config.highlight_score() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn builder_rejects_out_of_range_threshold() {
        let err = CheckerConfig::builder().highlight_threshold(101).build().unwrap_err();
        assert!(matches!(err, CheckError::Config(_)));
    }

    #[test]
    fn builder_rejects_zero_top_terms() {
        assert!(CheckerConfig::builder().top_terms(0).build().is_err());
    }

    #[test]
    fn builder_accepts_bounds() {
        let config = CheckerConfig::builder().highlight_threshold(100).top_terms(3).build().unwrap();
        assert_eq!(config.highlight_threshold, 100);
        assert_eq!(config.top_terms, 3);
        assert!(CheckerConfig::builder().highlight_threshold(0).build().is_ok());
    }

    // only test touching the PLAGIARISM_* variables
    #[test]
    fn env_overrides_and_rejects_bad_threshold() {
        env::set_var(THRESHOLD_ENV, " 55 ");
        env::set_var(REPORT_ENV, "essay_report.txt");
        let config = CheckerConfig::from_env().unwrap();
        assert_eq!(config.highlight_threshold, 55);
        assert_eq!(config.report_file_name, "essay_report.txt");

        env::set_var(THRESHOLD_ENV, "150");
        assert!(matches!(CheckerConfig::from_env(), Err(CheckError::Config(_))));
        env::set_var(THRESHOLD_ENV, "abc");
        assert!(matches!(CheckerConfig::from_env(), Err(CheckError::Config(_))));

        env::remove_var(THRESHOLD_ENV);
        env::set_var(REPORT_ENV, "  ");
        assert!(matches!(CheckerConfig::from_env(), Err(CheckError::Config(_))));

        env::remove_var(REPORT_ENV);
        assert_eq!(CheckerConfig::from_env().unwrap(), CheckerConfig::default());
    }
}
