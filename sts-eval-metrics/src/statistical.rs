use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};
use statrs::statistics::Statistics;
use sts_eval_core::{CoreError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticalResult {
    pub statistic: f64,
    pub p_value: Option<f64>,
    pub confidence_interval: Option<(f64, f64)>,
    pub sample_size: usize,
}

pub struct StatisticalAnalyzer;

impl StatisticalAnalyzer {
    /// Pearson product-moment correlation of `x` and `y`.
    ///
    /// The p-value is two-sided, from Student's t with n - 2 degrees of
    /// freedom. The confidence interval is the Fisher-z interval at
    /// `confidence`, available from four observations on.
    pub fn pearson(x: &[f64], y: &[f64], confidence: f64) -> Result<StatisticalResult> {
        if x.len() != y.len() {
            return Err(CoreError::Validation(format!(
                "cannot correlate {} scores with {} labels",
                x.len(),
                y.len()
            )));
        }
        let n = x.len();
        if n < 2 {
            return Err(CoreError::Validation(format!(
                "correlation needs at least 2 observations, got {}",
                n
            )));
        }

        let mean_x = x.mean();
        let mean_y = y.mean();
        let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
        for (a, b) in x.iter().zip(y.iter()) {
            let (dx, dy) = (a - mean_x, b - mean_y);
            sxy += dx * dy;
            sxx += dx * dx;
            syy += dy * dy;
        }

        if sxx == 0.0 || syy == 0.0 {
            return Err(CoreError::Undefined(
                "correlation of a constant sequence".to_string(),
            ));
        }

        let r = (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0);

        Ok(StatisticalResult {
            statistic: r,
            p_value: Some(Self::pearson_p_value(r, n)),
            confidence_interval: Self::fisher_interval(r, n, confidence),
            sample_size: n,
        })
    }

    fn pearson_p_value(r: f64, n: usize) -> f64 {
        if n == 2 {
            return 1.0;
        }
        let denominator = 1.0 - r * r;
        if denominator <= 0.0 {
            return 0.0;
        }

        let df = (n - 2) as f64;
        let t_stat = r * (df / denominator).sqrt();
        match StudentsT::new(0.0, 1.0, df) {
            Ok(t_dist) => (2.0 * (1.0 - t_dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => f64::NAN,
        }
    }

    fn fisher_interval(r: f64, n: usize, confidence: f64) -> Option<(f64, f64)> {
        if n < 4 || r.abs() >= 1.0 || !(0.0..1.0).contains(&confidence) {
            return None;
        }
        let normal = Normal::new(0.0, 1.0).ok()?;
        let z_crit = normal.inverse_cdf((1.0 + confidence) / 2.0);
        let z = r.atanh();
        let se = 1.0 / ((n - 3) as f64).sqrt();
        Some(((z - z_crit * se).tanh(), (z + z_crit * se).tanh()))
    }
}
