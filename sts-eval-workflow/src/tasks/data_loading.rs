use serde_json::json;
use sts_eval_core::{Result, StsDataset};

use super::{Task, TaskContext, TaskResult};

/// Reads the dataset at the context's source path, unless the context
/// already carries one.
pub struct DataLoadingTask;

impl DataLoadingTask {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DataLoadingTask {
    fn default() -> Self {
        Self::new()
    }
}

impl Task for DataLoadingTask {
    fn execute(&self, context: &mut TaskContext) -> Result<TaskResult> {
        if let Some(dataset) = &context.dataset {
            return Ok(TaskResult::success(json!({
                "source": "preloaded",
                "pairs": dataset.len(),
            })));
        }

        tracing::info!("Loading STS pairs from {}", context.source.display());

        let dataset = StsDataset::from_path(&context.source)?;
        let pairs = dataset.len();

        context.report.pairs = pairs;
        context.dataset = Some(dataset);

        Ok(TaskResult::success(json!({
            "source": context.source.display().to_string(),
            "pairs": pairs,
        })))
    }

    fn name(&self) -> &str {
        "data_loading"
    }
}
