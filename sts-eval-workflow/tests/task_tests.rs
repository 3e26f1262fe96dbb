use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use std::cell::Cell;
use sts_eval_core::{
    CoreError, DirectedMetric, MetricScores, Result, SentencePair, StsDataset,
};
use sts_eval_metrics::{EditDistance, WordErrorRate};
use sts_eval_workflow::{
    Analysis, CorrelationTask, DataLoadingTask, EvalConfig, SampleInspectionTask, ScoringTask,
    Task, TaskContext, TaskResult,
};

#[fixture]
fn dataset() -> StsDataset {
    StsDataset::new(
        vec![
            SentencePair::new("hello world", "hello world"),
            SentencePair::new("the cat sat", "a dog ran"),
            SentencePair::new("she likes tea", "she likes coffee"),
        ],
        vec![4.5, 1.0, 3.0],
    )
    .unwrap()
}

fn context(dataset: StsDataset) -> TaskContext {
    TaskContext::with_dataset(Analysis::Pearson, EvalConfig::default(), dataset)
}

// ===== TaskResult Tests =====

#[test]
fn test_task_result_success() {
    let result = TaskResult::success(serde_json::json!({"pairs": 3}));

    assert!(result.success);
    assert!(result.error.is_none());
    assert_eq!(result.output["pairs"], 3);
}

#[test]
fn test_task_result_failure() {
    let result = TaskResult::failure("boom".to_string());

    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some("boom"));
    assert!(result.output.is_null());
}

// ===== Context Tests =====

#[test]
fn test_context_without_dataset() {
    let context = TaskContext::new(Analysis::Nist, EvalConfig::default(), "sts-dev.csv");

    assert!(matches!(context.dataset(), Err(CoreError::InvalidState(_))));
    assert_eq!(context.report.source, "sts-dev.csv");
}

#[test]
fn test_scoring_requires_dataset() {
    let mut context = TaskContext::new(Analysis::Pearson, EvalConfig::default(), "unused");
    let task = ScoringTask::new(vec![Box::new(EditDistance::new())]);

    assert!(matches!(task.execute(&mut context), Err(CoreError::InvalidState(_))));
}

// ===== Task Tests =====

#[rstest]
fn test_data_loading_keeps_preloaded_dataset(dataset: StsDataset) {
    let mut context = context(dataset);
    let result = DataLoadingTask::new().execute(&mut context).unwrap();

    assert!(result.success);
    assert_eq!(result.output["pairs"], 3);
    assert_eq!(context.report.pairs, 3);
}

#[rstest]
fn test_scoring_task(dataset: StsDataset) {
    let mut context = context(dataset);
    let task = ScoringTask::new(vec![Box::new(EditDistance::new())]);

    assert_eq!(task.metric_names(), vec!["Edit Distance"]);
    task.execute(&mut context).unwrap();

    assert_eq!(
        context.scores,
        vec![MetricScores::new("Edit Distance", vec![0.0, 8.0, 5.0])]
    );
}

#[rstest]
fn test_correlation_task_keeps_undefined_rows(dataset: StsDataset) {
    let mut context = context(dataset);
    context.scores.push(MetricScores::new("constant", vec![1.0, 1.0, 1.0]));
    context.scores.push(MetricScores::new("Edit Distance", vec![0.0, 8.0, 5.0]));

    CorrelationTask::new().execute(&mut context).unwrap();

    let rows = &context.report.correlations;
    assert_eq!(rows.len(), 2);
    assert!(rows[0].r.is_none());
    assert!(rows[1].r.unwrap() < 0.0);
}

#[rstest]
fn test_correlation_task_length_mismatch_is_fatal(dataset: StsDataset) {
    let mut context = context(dataset);
    context.scores.push(MetricScores::new("short", vec![1.0, 2.0]));

    let result = CorrelationTask::new().execute(&mut context);
    assert!(matches!(result, Err(CoreError::Validation(_))));
}

/// Returns a different value on every call.
struct Drifting {
    calls: Cell<u32>,
}

impl DirectedMetric for Drifting {
    fn name(&self) -> &str {
        "Drifting"
    }

    fn score_directed(&self, _reference: &[String], _hypothesis: &[String]) -> Result<f64> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.calls.get() as f64)
    }
}

#[rstest]
fn test_sample_inspection_detects_asymmetry(dataset: StsDataset) {
    let mut context = context(dataset);
    let task = SampleInspectionTask::new(Drifting { calls: Cell::new(0) }, 0..1);

    let result = task.execute(&mut context).unwrap();
    assert!(!result.success);
    assert!(result.error.unwrap().contains("not symmetrical"));
    assert!(context.report.sample.is_none());
}

#[rstest]
fn test_sample_inspection_window(dataset: StsDataset) {
    let mut context = context(dataset);
    let config = EvalConfig::default();
    let task = SampleInspectionTask::new(config.nist(), 1..10);

    task.execute(&mut context).unwrap();
    let sample = context.report.sample.unwrap();

    assert_eq!((sample.start, sample.end), (1, 3));
    assert_eq!(sample.rows[0].index, 1);
    assert_eq!(sample.rows[0].first, "the cat sat");
    assert_eq!(sample.metric, "NIST");
}

#[test]
fn test_sample_inspection_nist_passes_symmetry_check_repeatedly() {
    let pair = SentencePair::new(
        "a man is playing a large flute while a woman is playing the guitar.",
        "a man is playing a flute and a woman is playing a large guitar.",
    );
    let config = EvalConfig::default();

    for _ in 0..50 {
        let dataset = StsDataset::new(vec![pair.clone()], vec![3.8]).unwrap();
        let mut context = context(dataset);
        let result = SampleInspectionTask::new(config.nist(), 0..1)
            .execute(&mut context)
            .unwrap();

        assert!(result.success, "{:?}", result.error);
        assert!(context.report.sample.unwrap().symmetry.is_some());
    }
}

#[test]
fn test_scoring_propagates_metric_errors() {
    let dataset = StsDataset::new(vec![SentencePair::new("", "x")], vec![1.0]).unwrap();
    let mut context = context(dataset);
    let task = ScoringTask::new(vec![Box::new(WordErrorRate::new())]);

    let result = task.execute(&mut context);
    assert!(result.unwrap_err().is_undefined());
    // The failed metric leaves no partial scores behind
    assert!(context.scores.is_empty());
}
