use serde_json::json;
use std::ops::Range;
use sts_eval_core::{DirectedMetric, MetricScores, PairMetric, Result};
use sts_eval_metrics::Symmetrical;

use super::{Task, TaskContext, TaskResult};
use crate::report::{SampleInspection, SampleRow, SymmetryCheck};

/// Scores a window of pairs with a symmetrical metric, checks the metric's
/// symmetry on the first dataset pair and picks the window's highest and
/// lowest scored pairs.
///
/// An asymmetric result is a task failure.
pub struct SampleInspectionTask<M> {
    metric: Symmetrical<M>,
    window: Range<usize>,
}

impl<M: DirectedMetric> SampleInspectionTask<M> {
    pub fn new(metric: M, window: Range<usize>) -> Self {
        Self {
            metric: Symmetrical::new(metric),
            window,
        }
    }
}

impl<M: DirectedMetric> Task for SampleInspectionTask<M> {
    fn execute(&self, context: &mut TaskContext) -> Result<TaskResult> {
        let dataset = context.dataset()?;
        let metric_name = self.metric.name().to_string();
        let start = self.window.start.min(dataset.len());

        let mut rows = Vec::new();
        for (offset, (label, pair)) in dataset.sample(self.window.clone()).iter().enumerate() {
            let score = self.metric.score(pair)?;
            tracing::debug!(index = start + offset, label, score, "Scored sample pair");
            rows.push(SampleRow {
                index: start + offset,
                label,
                score,
                first: pair.first.clone(),
                second: pair.second.clone(),
            });
        }

        let symmetry = match dataset.pairs().first() {
            Some(pair) => {
                let forward = self.metric.score(pair)?;
                let backward = self.metric.score(&pair.swapped())?;
                if forward != backward {
                    return Ok(TaskResult::failure(format!(
                        "Symmetrical {} is not symmetrical! Got {} and {}",
                        metric_name, forward, backward
                    )));
                }
                Some(SymmetryCheck {
                    first: pair.first.clone(),
                    second: pair.second.clone(),
                    forward,
                    backward,
                })
            }
            None => None,
        };

        let scores = MetricScores::new(
            metric_name.clone(),
            rows.iter().map(|row| row.score).collect(),
        );
        let highest = scores.argmax().map(|(idx, _)| rows[idx].clone());
        let lowest = scores.argmin().map(|(idx, _)| rows[idx].clone());

        let output = json!({
            "metric": metric_name,
            "sampled": rows.len(),
            "symmetric": symmetry.is_some(),
        });

        context.report.sample = Some(SampleInspection {
            metric: metric_name,
            start,
            end: start + rows.len(),
            rows,
            symmetry,
            highest,
            lowest,
        });

        Ok(TaskResult::success(output))
    }

    fn name(&self) -> &str {
        "sample_inspection"
    }
}
