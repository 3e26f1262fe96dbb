use approx::assert_relative_eq;
use sts_eval_metrics::aggregators::MetricAggregator;

#[test]
fn test_summarize() {
    let summary = MetricAggregator::summarize(&[5.0, 1.0, 4.0, 2.0, 3.0]);

    assert_eq!(summary.count, 5);
    assert_relative_eq!(summary.mean, 3.0);
    assert_relative_eq!(summary.median, 3.0);
    assert_relative_eq!(summary.std_dev, 2f64.sqrt(), epsilon = 1e-12);
    assert_eq!(summary.min, 1.0);
    assert_eq!(summary.max, 5.0);
}

#[test]
fn test_summarize_skips_nan() {
    let summary = MetricAggregator::summarize(&[1.0, f64::NAN, 3.0]);

    assert_eq!(summary.count, 2);
    assert_relative_eq!(summary.mean, 2.0);
}

#[test]
fn test_summarize_empty() {
    let summary = MetricAggregator::summarize(&[]);

    assert_eq!(summary.count, 0);
    assert_eq!(summary.mean, 0.0);
}

#[test]
fn test_percentile() {
    let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];

    assert_eq!(MetricAggregator::percentile(&sorted, 0.0), 1.0);
    assert_eq!(MetricAggregator::percentile(&sorted, 100.0), 5.0);
    assert_eq!(MetricAggregator::percentile(&sorted, 75.0), 4.0);
    assert_eq!(MetricAggregator::percentile(&[], 50.0), 0.0);
}
