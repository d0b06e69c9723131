//! Per-run Monte Carlo trial results.
//!
//! One record per resampling run, produced by an external evaluation
//! harness. The toolkit only consumes the numbers; it never computes them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub run: u32,
    pub train_sharpe: f64,
    pub test_sharpe: f64,
    pub train_trades: u32,
    pub test_trades: u32,
}

impl TrialRecord {
    /// Relative out-of-sample decay of the train-period Sharpe. Zero when
    /// the train Sharpe itself is zero.
    pub fn degradation(&self) -> f64 {
        if self.train_sharpe == 0.0 {
            0.0
        } else {
            (self.train_sharpe - self.test_sharpe) / self.train_sharpe.abs()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn trial(train_sharpe: f64, test_sharpe: f64) -> TrialRecord {
        TrialRecord {
            run: 1,
            train_sharpe,
            test_sharpe,
            train_trades: 40,
            test_trades: 25,
        }
    }

    #[test]
    fn degradation_of_half_lost_sharpe() {
        assert_relative_eq!(trial(2.0, 1.0).degradation(), 0.5);
    }

    #[test]
    fn degradation_negative_when_test_outperforms() {
        assert_relative_eq!(trial(1.0, 1.5).degradation(), -0.5);
    }

    #[test]
    fn degradation_zero_train_sharpe() {
        assert_relative_eq!(trial(0.0, 1.0).degradation(), 0.0);
    }

    #[test]
    fn degradation_with_negative_train_sharpe() {
        // Losing in-sample, losing harder out-of-sample.
        assert_relative_eq!(trial(-1.0, -2.0).degradation(), 1.0);
    }
}
