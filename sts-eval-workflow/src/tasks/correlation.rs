use serde_json::json;
use sts_eval_core::Result;
use sts_eval_metrics::{MetricAggregator, StatisticalAnalyzer};

use super::{Task, TaskContext, TaskResult};
use crate::report::CorrelationRow;

/// Confidence level of the reported Fisher-z intervals.
pub const CONFIDENCE_LEVEL: f64 = 0.95;

/// Correlates every computed score sequence with the gold labels.
///
/// A metric whose scores are constant has no correlation; its row is kept
/// with `r` absent and a warning is logged.
#[derive(Debug, Default)]
pub struct CorrelationTask;

impl CorrelationTask {
    pub fn new() -> Self {
        Self
    }
}

impl Task for CorrelationTask {
    fn execute(&self, context: &mut TaskContext) -> Result<TaskResult> {
        let labels = context.dataset()?.labels();
        let mut rows = Vec::with_capacity(context.scores.len());

        for metric in &context.scores {
            let summary = MetricAggregator::summarize(&metric.scores);

            let row = match StatisticalAnalyzer::pearson(&metric.scores, labels, CONFIDENCE_LEVEL) {
                Ok(result) => CorrelationRow {
                    metric: metric.name.clone(),
                    r: Some(result.statistic),
                    p_value: result.p_value,
                    confidence_interval: result.confidence_interval,
                    sample_size: result.sample_size,
                    summary,
                },
                Err(err) if err.is_undefined() => {
                    tracing::warn!(metric = %metric.name, %err, "Correlation is undefined");
                    CorrelationRow {
                        metric: metric.name.clone(),
                        r: None,
                        p_value: None,
                        confidence_interval: None,
                        sample_size: metric.len(),
                        summary,
                    }
                }
                Err(err) => return Err(err),
            };

            tracing::info!(metric = %row.metric, r = ?row.r, "Correlated with labels");
            rows.push(row);
        }

        let output = json!({ "correlations": rows.len() });
        context.report.correlations.extend(rows);
        Ok(TaskResult::success(output))
    }

    fn name(&self) -> &str {
        "correlation"
    }
}
