//! Randomized train/test window generation for Monte Carlo resampling.
//!
//! The test-window start is drawn from a pre-validated interval so every
//! split lands inside the historical boundary by construction. Bounds are
//! never repaired after the draw: a request that cannot host a split fails
//! with [`WfvalError::InsufficientHistory`] up front.

use crate::domain::error::WfvalError;
use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A half-open window of calendar days, `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, WfvalError> {
        if start >= end {
            return Err(WfvalError::InvalidInput {
                field: "range".to_string(),
                reason: format!("start {} must be before end {}", start, end),
            });
        }
        Ok(Self { start, end })
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// One request for a randomized split. The range's end date is the data
/// availability boundary supplied by the caller; the generator treats it as
/// opaque and never reaches past it.
#[derive(Debug, Clone)]
pub struct SplitRequest {
    pub range: DateRange,
    pub train_fraction: f64,
    pub test_length: Duration,
    pub seed: Option<u64>,
}

/// A (train, test) window pair with `train.end == test.start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub train: DateRange,
    pub test: DateRange,
}

/// Generate one randomized split.
///
/// The training window always begins at `range.start`; the test start is
/// drawn uniformly between the earliest position that leaves room for the
/// training window and the latest position that keeps the test window
/// inside the range. Supplying the same seed reproduces the same split.
pub fn generate_split(request: &SplitRequest) -> Result<Split, WfvalError> {
    if !(request.train_fraction > 0.0 && request.train_fraction < 1.0) {
        return Err(WfvalError::InvalidInput {
            field: "train_fraction".to_string(),
            reason: format!(
                "must be strictly between 0 and 1, got {}",
                request.train_fraction
            ),
        });
    }

    let test_days = request.test_length.num_days();
    if test_days <= 0 {
        return Err(WfvalError::InvalidInput {
            field: "test_length".to_string(),
            reason: format!("must be at least one day, got {} days", test_days),
        });
    }

    let total_days = request.range.days();
    let usable_days = total_days - test_days;
    if usable_days <= 0 {
        return Err(WfvalError::InsufficientHistory {
            total_days,
            train_days: 1,
            test_days,
        });
    }

    // Training fraction applies to the history left once the test window is
    // reserved. A window under one day cannot train anything.
    let train_days = (request.train_fraction * usable_days as f64).floor() as i64;
    if train_days < 1 {
        return Err(WfvalError::InsufficientHistory {
            total_days,
            train_days: 1,
            test_days,
        });
    }

    let earliest_test_start = request.range.start + Duration::days(train_days);
    let latest_test_start = request.range.end - Duration::days(test_days);
    if earliest_test_start > latest_test_start {
        return Err(WfvalError::InsufficientHistory {
            total_days,
            train_days,
            test_days,
        });
    }

    let span = (latest_test_start - earliest_test_start).num_days();
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let offset = rng.gen_range(0..=span);

    let test_start = earliest_test_start + Duration::days(offset);
    let test_end = test_start + Duration::days(test_days);

    let split = Split {
        train: DateRange {
            start: request.range.start,
            end: test_start,
        },
        test: DateRange {
            start: test_start,
            end: test_end,
        },
    };

    // A violation here is a bug in the bound computation above, not bad
    // input, so it must not surface as a recoverable error.
    assert!(
        split.test.end <= request.range.end,
        "test window ends {} past history boundary {}",
        split.test.end,
        request.range.end
    );
    assert!(
        split.train.start >= request.range.start,
        "train window starts {} before history start {}",
        split.train.start,
        request.range.start
    );

    Ok(split)
}

/// A batch of split requests sharing one shape, one request per run.
#[derive(Debug, Clone)]
pub struct ResamplePlan {
    pub range: DateRange,
    pub train_fraction: f64,
    pub test_length: Duration,
    pub runs: u32,
    pub seed: Option<u64>,
}

impl ResamplePlan {
    /// Request for run `run` (0-indexed). With a base seed configured, run
    /// `i` draws with seed `base + i`; otherwise every run is
    /// entropy-seeded.
    pub fn request_for_run(&self, run: u32) -> SplitRequest {
        SplitRequest {
            range: self.range,
            train_fraction: self.train_fraction,
            test_length: self.test_length,
            seed: self.seed.map(|base| base + run as u64),
        }
    }
}
