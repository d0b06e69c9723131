//! Report output port trait.

use crate::domain::decision::Assessment;
use crate::domain::error::WfvalError;
use crate::domain::split::Split;
use crate::domain::summary::ResampleSummary;
use std::path::Path;

/// Port for writing split schedules and resampling summaries.
pub trait ReportPort {
    fn write_splits(&self, splits: &[Split], output_path: &Path) -> Result<(), WfvalError>;

    fn write_summary(
        &self,
        summary: &ResampleSummary,
        assessment: &Assessment,
        output_path: &Path,
    ) -> Result<(), WfvalError>;
}
