//! Regime snapshot access port trait.

use crate::domain::error::WfvalError;
use crate::domain::regime::RegimeSnapshot;
use chrono::NaiveDate;

pub trait SnapshotPort {
    fn read_snapshots(&self) -> Result<Vec<(NaiveDate, RegimeSnapshot)>, WfvalError>;
}
