//! Aggregate statistics over a set of Monte Carlo trials.

use crate::domain::error::WfvalError;
use crate::domain::trial::TrialRecord;
use serde::Serialize;

/// A trial whose degradation exceeds this is counted as overfit.
pub const OVERFIT_DEGRADATION: f64 = 0.30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResampleSummary {
    pub runs: usize,
    pub mean_train_sharpe: f64,
    pub mean_test_sharpe: f64,
    pub mean_degradation: f64,
    pub std_degradation: f64,
    pub overfit_rate: f64,
}

impl ResampleSummary {
    pub fn compute(trials: &[TrialRecord]) -> Result<Self, WfvalError> {
        if trials.is_empty() {
            return Err(WfvalError::InvalidInput {
                field: "trials".to_string(),
                reason: "at least one trial is required".to_string(),
            });
        }

        let degradations: Vec<f64> = trials.iter().map(TrialRecord::degradation).collect();
        let overfit = degradations
            .iter()
            .filter(|d| **d > OVERFIT_DEGRADATION)
            .count();

        Ok(Self {
            runs: trials.len(),
            mean_train_sharpe: mean(trials.iter().map(|t| t.train_sharpe)),
            mean_test_sharpe: mean(trials.iter().map(|t| t.test_sharpe)),
            mean_degradation: mean(degradations.iter().copied()),
            std_degradation: population_std(&degradations),
            overfit_rate: overfit as f64 / trials.len() as f64,
        })
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    sum / count as f64
}

fn population_std(values: &[f64]) -> f64 {
    let m = mean(values.iter().copied());
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn trial(run: u32, train_sharpe: f64, test_sharpe: f64) -> TrialRecord {
        TrialRecord {
            run,
            train_sharpe,
            test_sharpe,
            train_trades: 30,
            test_trades: 20,
        }
    }

    #[test]
    fn empty_trials_rejected() {
        let err = ResampleSummary::compute(&[]).unwrap_err();
        assert!(matches!(err, WfvalError::InvalidInput { field, .. } if field == "trials"));
    }

    #[test]
    fn single_trial_summary() {
        let summary = ResampleSummary::compute(&[trial(1, 2.0, 1.0)]).unwrap();
        assert_eq!(summary.runs, 1);
        assert_relative_eq!(summary.mean_train_sharpe, 2.0);
        assert_relative_eq!(summary.mean_test_sharpe, 1.0);
        assert_relative_eq!(summary.mean_degradation, 0.5);
        assert_relative_eq!(summary.std_degradation, 0.0);
        assert_relative_eq!(summary.overfit_rate, 1.0);
    }

    #[test]
    fn mixed_trials_summary() {
        // Degradations: 0.5, 0.0, -0.25 → mean 1/12, two of three at or
        // under the overfit threshold.
        let trials = vec![
            trial(1, 2.0, 1.0),
            trial(2, 1.0, 1.0),
            trial(3, 0.8, 1.0),
        ];
        let summary = ResampleSummary::compute(&trials).unwrap();

        assert_eq!(summary.runs, 3);
        assert_relative_eq!(summary.mean_degradation, (0.5 - 0.25) / 3.0, epsilon = 1e-12);
        assert_relative_eq!(summary.overfit_rate, 1.0 / 3.0);
    }

    #[test]
    fn degradation_below_threshold_is_not_overfit() {
        let trials = vec![trial(1, 1.0, 0.75)];
        let summary = ResampleSummary::compute(&trials).unwrap();
        assert_relative_eq!(summary.overfit_rate, 0.0);
    }

    #[test]
    fn population_std_matches_hand_calculation() {
        // Degradations 0.5 and 0.1: mean 0.3, population std 0.2.
        let trials = vec![trial(1, 1.0, 0.5), trial(2, 1.0, 0.9)];
        let summary = ResampleSummary::compute(&trials).unwrap();
        assert_relative_eq!(summary.std_degradation, 0.2, epsilon = 1e-12);
    }
}
