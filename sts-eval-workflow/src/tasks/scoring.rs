use serde_json::json;
use sts_eval_core::{MetricScores, PairMetric, Result};

use super::{Task, TaskContext, TaskResult};

/// Scores every dataset pair with each metric in turn.
///
/// Any metric error, including an undefined score, aborts the run.
pub struct ScoringTask {
    metrics: Vec<Box<dyn PairMetric>>,
}

impl ScoringTask {
    pub fn new(metrics: Vec<Box<dyn PairMetric>>) -> Self {
        Self { metrics }
    }

    pub fn metric_names(&self) -> Vec<&str> {
        self.metrics.iter().map(|m| m.name()).collect()
    }
}

impl Task for ScoringTask {
    fn execute(&self, context: &mut TaskContext) -> Result<TaskResult> {
        let dataset = context.dataset()?;
        let mut computed = Vec::with_capacity(self.metrics.len());

        for metric in &self.metrics {
            tracing::info!(metric = metric.name(), pairs = dataset.len(), "Scoring pairs");

            let scores = dataset
                .pairs()
                .iter()
                .map(|pair| metric.score(pair))
                .collect::<Result<Vec<f64>>>()?;

            computed.push(MetricScores::new(metric.name(), scores));
        }

        let names: Vec<&str> = computed.iter().map(|s| s.name.as_str()).collect();
        let output = json!({ "metrics": names, "pairs": dataset.len() });

        context.scores.extend(computed);
        Ok(TaskResult::success(output))
    }

    fn name(&self) -> &str {
        "scoring"
    }
}
