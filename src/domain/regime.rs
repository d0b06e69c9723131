//! Market regime scoring and classification.
//!
//! A composite 0-100 score built from five indicator readings, smoothed
//! over recent observations, then bucketed into three regimes with
//! hysteresis so the label does not whipsaw around a threshold.
//!
//! Score interpretation:
//! - 0-35: ZIRP (low dispersion, low rates)
//! - 35-65: transitional
//! - 65-100: QT (high dispersion, high rates)

use std::collections::VecDeque;
use std::fmt;

const SCORE_HISTORY: usize = 20;
const SMOOTHING_WINDOW: usize = 10;
const QT_ENTRY: f64 = 65.0;
const QT_EXIT: f64 = 55.0;
const ZIRP_ENTRY: f64 = 35.0;
const ZIRP_EXIT: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    Qt,
    Zirp,
    Transitional,
}

impl Regime {
    /// Portfolio fraction deployed under this regime.
    pub fn allocation(&self) -> f64 {
        match self {
            Regime::Qt => 0.70,
            Regime::Zirp => 0.40,
            Regime::Transitional => 0.50,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Regime::Qt => "QT",
            Regime::Zirp => "ZIRP",
            Regime::Transitional => "TRANSITIONAL",
        };
        write!(f, "{}", label)
    }
}

/// One day's indicator readings. Any reading can be absent during warmup;
/// absent readings leave the score untouched.
#[derive(Debug, Clone, Default)]
pub struct RegimeSnapshot {
    /// Trailing average VIX level.
    pub vix: Option<f64>,
    /// Mean pairwise correlation across sector ETFs.
    pub sector_correlation: Option<f64>,
    /// Long-bond price over its moving average.
    pub bond_trend: Option<f64>,
    /// Short-vol over spot-vol ratio.
    pub term_structure: Option<f64>,
    /// Standard deviation of trailing sector returns.
    pub dispersion: Option<f64>,
}

impl RegimeSnapshot {
    /// Composite score, 0-100. Starts at neutral 50 and applies stepped
    /// adjustments per indicator.
    pub fn score(&self) -> f64 {
        let mut score: f64 = 50.0;

        if let Some(vix) = self.vix {
            if vix > 22.0 {
                score += 4.0;
            } else if vix > 18.0 {
                score += 2.0;
            } else if vix < 13.0 {
                score -= 4.0;
            } else if vix < 15.0 {
                score -= 2.0;
            }
        }

        if let Some(corr) = self.sector_correlation {
            if corr < 0.40 {
                score += 6.25;
            } else if corr < 0.50 {
                score += 3.75;
            } else if corr > 0.65 {
                score -= 6.25;
            } else if corr > 0.55 {
                score -= 3.75;
            }
        }

        if let Some(trend) = self.bond_trend {
            if trend < 0.95 {
                score += 5.0;
            } else if trend < 1.0 {
                score += 2.5;
            } else if trend > 1.05 {
                score -= 5.0;
            } else if trend > 1.0 {
                score -= 2.5;
            }
        }

        if let Some(ts) = self.term_structure {
            if ts > 1.15 {
                score += 3.0;
            } else if ts > 1.05 {
                score += 1.5;
            } else if ts < 0.85 {
                score -= 3.0;
            } else if ts < 0.95 {
                score -= 1.5;
            }
        }

        if let Some(dispersion) = self.dispersion {
            if dispersion > 0.10 {
                score += 3.0;
            } else if dispersion > 0.07 {
                score += 1.5;
            } else if dispersion < 0.03 {
                score -= 3.0;
            } else if dispersion < 0.05 {
                score -= 1.5;
            }
        }

        score.clamp(0.0, 100.0)
    }
}

/// Stateful classifier: smooths raw scores and applies entry/exit
/// hysteresis around the regime thresholds.
#[derive(Debug)]
pub struct RegimeDetector {
    history: VecDeque<f64>,
    current: Regime,
    smoothed: f64,
}

impl Default for RegimeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RegimeDetector {
    pub fn new() -> Self {
        Self {
            history: VecDeque::with_capacity(SCORE_HISTORY),
            current: Regime::Transitional,
            smoothed: 50.0,
        }
    }

    pub fn current(&self) -> Regime {
        self.current
    }

    pub fn smoothed_score(&self) -> f64 {
        self.smoothed
    }

    /// Feed one raw score, returns the regime after this observation.
    pub fn update(&mut self, raw_score: f64) -> Regime {
        if self.history.len() == SCORE_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(raw_score);

        let window = self.history.len().min(SMOOTHING_WINDOW);
        let recent = self.history.iter().rev().take(window);
        self.smoothed = recent.sum::<f64>() / window as f64;

        self.current = match self.current {
            Regime::Qt if self.smoothed < QT_EXIT => Regime::Transitional,
            Regime::Zirp if self.smoothed > ZIRP_EXIT => Regime::Transitional,
            Regime::Transitional if self.smoothed >= QT_ENTRY => Regime::Qt,
            Regime::Transitional if self.smoothed <= ZIRP_ENTRY => Regime::Zirp,
            unchanged => unchanged,
        };

        self.current
    }
}
