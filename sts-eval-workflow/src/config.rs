use serde::{Deserialize, Serialize};
use std::ops::Range;
use sts_eval_core::{CoreError, Result};
use sts_eval_metrics::{BleuCalculator, LongestCommonSubstring, NistCalculator, SmoothingMethod};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Settings for one evaluation run.
///
/// Every field has a default, so a partial configuration source only needs
/// to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_windows"))]
pub struct EvalConfig {
    pub output_format: OutputFormat,

    /// Absolute document-frequency cutoff for both TF-IDF vocabularies.
    #[validate(range(min = 1))]
    pub min_df: usize,

    /// Pair window inspected by the NIST sample analysis.
    pub sample_start: usize,
    pub sample_end: usize,

    /// Feature window shown from the fitted TF-IDF vocabulary.
    pub vocabulary_preview_start: usize,
    pub vocabulary_preview_end: usize,

    pub autojunk: bool,
    pub bleu_smoothing: SmoothingMethod,
    pub bleu_auto_reweigh: bool,

    #[validate(range(min = 1))]
    pub nist_max_n: usize,

    #[validate(range(min = 1))]
    pub bleu_max_n: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            min_df: 10,
            sample_start: 120,
            sample_end: 140,
            vocabulary_preview_start: 200,
            vocabulary_preview_end: 230,
            autojunk: true,
            bleu_smoothing: SmoothingMethod::Floor,
            bleu_auto_reweigh: false,
            nist_max_n: 5,
            bleu_max_n: 4,
        }
    }
}

impl EvalConfig {
    /// Run the field and window checks, reporting failures as
    /// [`CoreError::Config`].
    pub fn validated(self) -> Result<Self> {
        self.validate()
            .map_err(|e| CoreError::Config(e.to_string()))?;
        Ok(self)
    }

    pub fn sample_window(&self) -> Range<usize> {
        self.sample_start..self.sample_end
    }

    pub fn vocabulary_preview(&self) -> Range<usize> {
        self.vocabulary_preview_start..self.vocabulary_preview_end
    }

    pub fn nist(&self) -> NistCalculator {
        NistCalculator::new(self.nist_max_n)
    }

    pub fn bleu(&self) -> BleuCalculator {
        BleuCalculator::new(self.bleu_max_n)
            .with_smoothing(self.bleu_smoothing)
            .with_auto_reweigh(self.bleu_auto_reweigh)
    }

    pub fn longest_common_substring(&self) -> LongestCommonSubstring {
        LongestCommonSubstring::new(self.autojunk)
    }
}

fn validate_windows(config: &EvalConfig) -> std::result::Result<(), ValidationError> {
    if config.sample_start > config.sample_end {
        let mut err = ValidationError::new("sample_window");
        err.message = Some("sample_start must not exceed sample_end".into());
        return Err(err);
    }
    if config.vocabulary_preview_start > config.vocabulary_preview_end {
        let mut err = ValidationError::new("vocabulary_preview");
        err.message = Some("vocabulary_preview_start must not exceed vocabulary_preview_end".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(EvalConfig::default().validated().is_ok());
    }

    #[test]
    fn zero_min_df_rejected() {
        let config = EvalConfig {
            min_df: 0,
            ..Default::default()
        };
        assert!(matches!(config.validated(), Err(CoreError::Config(_))));
    }

    #[test]
    fn inverted_sample_window_rejected() {
        let config = EvalConfig {
            sample_start: 10,
            sample_end: 5,
            ..Default::default()
        };
        let err = config.validated().unwrap_err();
        assert!(err.to_string().contains("sample_start"));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: EvalConfig =
            serde_json::from_str(r#"{"min_df": 2, "bleu_smoothing": "add_one"}"#).unwrap();
        assert_eq!(config.min_df, 2);
        assert_eq!(config.bleu_smoothing, SmoothingMethod::AddOne);
        assert_eq!(config.sample_window(), 120..140);
    }
}
