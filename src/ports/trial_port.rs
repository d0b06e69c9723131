//! Trial results access port trait.

use crate::domain::error::WfvalError;
use crate::domain::trial::TrialRecord;

pub trait TrialPort {
    fn read_trials(&self) -> Result<Vec<TrialRecord>, WfvalError>;
}
