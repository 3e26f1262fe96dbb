pub mod data_loading;
pub mod scoring;
pub mod tfidf;
pub mod sampling;
pub mod correlation;

pub use data_loading::*;
pub use scoring::*;
pub use tfidf::*;
pub use sampling::*;
pub use correlation::*;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use sts_eval_core::{CoreError, MetricScores, Result, StsDataset};

use crate::config::EvalConfig;
use crate::report::{Analysis, EvalReport};

/// State threaded through the tasks of one pipeline run.
///
/// Tasks read what earlier tasks produced (the dataset, metric scores) and
/// write their findings into `report`.
#[derive(Debug, Clone)]
pub struct TaskContext {
    pub config: EvalConfig,
    pub source: PathBuf,
    pub dataset: Option<StsDataset>,
    pub scores: Vec<MetricScores>,
    pub report: EvalReport,
}

impl TaskContext {
    pub fn new(analysis: Analysis, config: EvalConfig, source: impl Into<PathBuf>) -> Self {
        let source = source.into();
        Self {
            report: EvalReport::new(analysis, source.display().to_string()),
            config,
            source,
            dataset: None,
            scores: Vec::new(),
        }
    }

    /// A context whose dataset is already in memory.
    pub fn with_dataset(analysis: Analysis, config: EvalConfig, dataset: StsDataset) -> Self {
        let mut context = Self::new(analysis, config, "<memory>");
        context.report.pairs = dataset.len();
        context.dataset = Some(dataset);
        context
    }

    pub fn dataset(&self) -> Result<&StsDataset> {
        self.dataset
            .as_ref()
            .ok_or_else(|| CoreError::InvalidState("dataset has not been loaded".to_string()))
    }
}

pub trait Task {
    fn execute(&self, context: &mut TaskContext) -> Result<TaskResult>;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    pub success: bool,
    pub output: serde_json::Value,
    pub error: Option<String>,
}

impl TaskResult {
    pub fn success(output: serde_json::Value) -> Self {
        Self {
            success: true,
            output,
            error: None,
        }
    }

    pub fn failure(error: String) -> Self {
        Self {
            success: false,
            output: serde_json::Value::Null,
            error: Some(error),
        }
    }
}
