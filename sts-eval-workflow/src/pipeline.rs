use std::path::PathBuf;
use sts_eval_core::{CoreError, PairMetric, Result, StsDataset};
use sts_eval_metrics::{EditDistance, Symmetrical, WordErrorRate};

use crate::config::EvalConfig;
use crate::report::{Analysis, EvalReport};
use crate::tasks::{
    CorrelationTask, DataLoadingTask, SampleInspectionTask, ScoringTask, Task, TaskContext,
    TfidfTask,
};

/// An ordered list of tasks run against one shared context.
pub struct Pipeline {
    analysis: Analysis,
    tasks: Vec<Box<dyn Task>>,
}

impl Pipeline {
    pub fn new(analysis: Analysis) -> Self {
        Self {
            analysis,
            tasks: Vec::new(),
        }
    }

    pub fn with_task(mut self, task: impl Task + 'static) -> Self {
        self.tasks.push(Box::new(task));
        self
    }

    pub fn analysis(&self) -> Analysis {
        self.analysis
    }

    pub fn task_names(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }

    /// Pipeline for `analysis` with the metrics `config` selects.
    pub fn for_analysis(analysis: Analysis, config: &EvalConfig) -> Self {
        match analysis {
            Analysis::Pearson => Self::pearson(config),
            Analysis::Nist => Self::nist(config),
            Analysis::Tfidf => Self::tfidf(config),
        }
    }

    /// NIST, BLEU, word error rate, longest common substring and edit
    /// distance, each correlated with the labels.
    pub fn pearson(config: &EvalConfig) -> Self {
        let metrics: Vec<Box<dyn PairMetric>> = vec![
            Box::new(Symmetrical::new(config.nist())),
            Box::new(Symmetrical::new(config.bleu())),
            Box::new(WordErrorRate::new()),
            Box::new(config.longest_common_substring()),
            Box::new(EditDistance::new()),
        ];

        Self::new(Analysis::Pearson)
            .with_task(DataLoadingTask::new())
            .with_task(ScoringTask::new(metrics))
            .with_task(CorrelationTask::new())
    }

    /// Symmetrical NIST over a sample window of pairs.
    pub fn nist(config: &EvalConfig) -> Self {
        Self::new(Analysis::Nist)
            .with_task(DataLoadingTask::new())
            .with_task(SampleInspectionTask::new(config.nist(), config.sample_window()))
    }

    /// Raw and preprocessed TF-IDF cosine similarity.
    pub fn tfidf(config: &EvalConfig) -> Self {
        Self::new(Analysis::Tfidf)
            .with_task(DataLoadingTask::new())
            .with_task(TfidfTask::new(config.min_df))
            .with_task(CorrelationTask::new())
    }

    /// Load the dataset at `source` and run every task.
    pub fn run(&self, config: EvalConfig, source: impl Into<PathBuf>) -> Result<EvalReport> {
        self.execute(TaskContext::new(self.analysis, config, source))
    }

    /// Run against an in-memory dataset; data loading keeps it as is.
    pub fn run_with_dataset(&self, config: EvalConfig, dataset: StsDataset) -> Result<EvalReport> {
        self.execute(TaskContext::with_dataset(self.analysis, config, dataset))
    }

    fn execute(&self, mut context: TaskContext) -> Result<EvalReport> {
        tracing::info!(analysis = %self.analysis, tasks = self.tasks.len(), "Starting pipeline");

        for task in &self.tasks {
            tracing::debug!(task = task.name(), "Executing task");
            let result = task.execute(&mut context)?;

            if !result.success {
                let reason = result.error.unwrap_or_else(|| "unknown error".to_string());
                tracing::error!(task = task.name(), %reason, "Task failed");
                return Err(CoreError::InvalidState(reason));
            }
            tracing::debug!(task = task.name(), output = %result.output, "Task completed");
        }

        tracing::info!(analysis = %self.analysis, "Pipeline completed");
        Ok(context.report)
    }
}
