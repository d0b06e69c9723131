//! CSV file adapters for trial results and regime snapshots.

use crate::domain::error::WfvalError;
use crate::domain::regime::RegimeSnapshot;
use crate::domain::trial::TrialRecord;
use crate::ports::snapshot_port::SnapshotPort;
use crate::ports::trial_port::TrialPort;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;

/// Reads per-run trial results written by the evaluation harness.
///
/// Expected columns: `run,train_sharpe,test_sharpe,train_trades,test_trades`.
pub struct CsvTrialAdapter {
    path: PathBuf,
}

impl CsvTrialAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TrialPort for CsvTrialAdapter {
    fn read_trials(&self) -> Result<Vec<TrialRecord>, WfvalError> {
        let mut rdr =
            csv::Reader::from_path(&self.path).map_err(|e| WfvalError::TrialData {
                file: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut trials = Vec::new();
        for result in rdr.deserialize() {
            let record: TrialRecord = result.map_err(|e| WfvalError::TrialData {
                file: self.path.display().to_string(),
                reason: e.to_string(),
            })?;
            trials.push(record);
        }

        trials.sort_by_key(|t| t.run);
        Ok(trials)
    }
}

#[derive(Debug, Deserialize)]
struct SnapshotRow {
    date: String,
    vix: Option<f64>,
    sector_correlation: Option<f64>,
    bond_trend: Option<f64>,
    term_structure: Option<f64>,
    dispersion: Option<f64>,
}

/// Reads dated indicator snapshots for regime classification.
///
/// Expected columns: `date,vix,sector_correlation,bond_trend,term_structure,dispersion`;
/// any indicator field may be empty during warmup.
pub struct CsvSnapshotAdapter {
    path: PathBuf,
}

impl CsvSnapshotAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SnapshotPort for CsvSnapshotAdapter {
    fn read_snapshots(&self) -> Result<Vec<(NaiveDate, RegimeSnapshot)>, WfvalError> {
        let mut rdr =
            csv::Reader::from_path(&self.path).map_err(|e| WfvalError::TrialData {
                file: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

        let mut snapshots = Vec::new();
        for result in rdr.deserialize() {
            let row: SnapshotRow = result.map_err(|e| WfvalError::TrialData {
                file: self.path.display().to_string(),
                reason: e.to_string(),
            })?;

            let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|e| {
                WfvalError::TrialData {
                    file: self.path.display().to_string(),
                    reason: format!("invalid date {}: {}", row.date, e),
                }
            })?;

            snapshots.push((
                date,
                RegimeSnapshot {
                    vix: row.vix,
                    sector_correlation: row.sector_correlation,
                    bond_trend: row.bond_trend,
                    term_structure: row.term_structure,
                    dispersion: row.dispersion,
                },
            ));
        }

        snapshots.sort_by_key(|(date, _)| *date);
        Ok(snapshots)
    }
}
