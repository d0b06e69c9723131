//! Robustness verdict over a resampling summary.
//!
//! Five levels, checked in order of severity:
//! - ABANDON: negative mean test Sharpe
//! - ROBUST: degradation < 15% with std < 10%
//! - ACCEPTABLE: degradation < 30% with std < 20%
//! - MARGINAL: degradation < 50%
//! - OVERFITTING_LIKELY: everything else

use crate::domain::summary::ResampleSummary;
use std::fmt;

const ROBUST_MAX_DEGRADATION: f64 = 0.15;
const ROBUST_MAX_STD: f64 = 0.10;
const ACCEPTABLE_MAX_DEGRADATION: f64 = 0.30;
const ACCEPTABLE_MAX_STD: f64 = 0.20;
const MARGINAL_MAX_DEGRADATION: f64 = 0.50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Robustness {
    Robust,
    Acceptable,
    Marginal,
    OverfitLikely,
    Abandon,
}

impl fmt::Display for Robustness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Robustness::Robust => "ROBUST",
            Robustness::Acceptable => "ACCEPTABLE",
            Robustness::Marginal => "MARGINAL",
            Robustness::OverfitLikely => "OVERFITTING_LIKELY",
            Robustness::Abandon => "ABANDON",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub verdict: Robustness,
    pub reason: String,
    pub recommendation: &'static str,
}

impl Assessment {
    pub fn from_summary(summary: &ResampleSummary) -> Self {
        let mean_deg = summary.mean_degradation;
        let std_deg = summary.std_degradation;

        if summary.mean_test_sharpe < 0.0 {
            return Self {
                verdict: Robustness::Abandon,
                reason: format!("negative test Sharpe ({:.2})", summary.mean_test_sharpe),
                recommendation: "Strategy loses money out-of-sample. Abandon.",
            };
        }

        if mean_deg < ROBUST_MAX_DEGRADATION && std_deg < ROBUST_MAX_STD {
            return Self {
                verdict: Robustness::Robust,
                reason: format!(
                    "low degradation ({:.1}%) with low variance ({:.1}%)",
                    mean_deg * 100.0,
                    std_deg * 100.0
                ),
                recommendation: "Strategy generalizes well. Ready for paper trading.",
            };
        }

        if mean_deg < ACCEPTABLE_MAX_DEGRADATION && std_deg < ACCEPTABLE_MAX_STD {
            return Self {
                verdict: Robustness::Acceptable,
                reason: format!(
                    "moderate degradation ({:.1}%) with acceptable variance ({:.1}%)",
                    mean_deg * 100.0,
                    std_deg * 100.0
                ),
                recommendation: "Strategy is acceptable. Consider further optimization.",
            };
        }

        if mean_deg < MARGINAL_MAX_DEGRADATION {
            return Self {
                verdict: Robustness::Marginal,
                reason: format!("high degradation ({:.1}%)", mean_deg * 100.0),
                recommendation: "Strategy shows signs of overfitting. Use with caution.",
            };
        }

        Self {
            verdict: Robustness::OverfitLikely,
            reason: format!(
                "very high degradation ({:.1}%) or overfit rate ({:.1}%)",
                mean_deg * 100.0,
                summary.overfit_rate * 100.0
            ),
            recommendation: "Strategy appears overfit. Abandon or redesign.",
        }
    }
}
