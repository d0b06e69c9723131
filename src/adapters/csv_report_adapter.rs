//! CSV report writer for split schedules and resampling summaries.

use crate::domain::decision::Assessment;
use crate::domain::error::WfvalError;
use crate::domain::split::Split;
use crate::domain::summary::ResampleSummary;
use crate::ports::report_port::ReportPort;
use std::path::Path;

pub struct CsvReportAdapter;

fn write_error(path: &Path, err: impl std::fmt::Display) -> WfvalError {
    WfvalError::Io(std::io::Error::other(format!(
        "failed to write {}: {}",
        path.display(),
        err
    )))
}

impl ReportPort for CsvReportAdapter {
    fn write_splits(&self, splits: &[Split], output_path: &Path) -> Result<(), WfvalError> {
        let mut wtr = csv::Writer::from_path(output_path).map_err(|e| write_error(output_path, e))?;

        wtr.write_record(["run", "train_start", "train_end", "test_start", "test_end"])
            .map_err(|e| write_error(output_path, e))?;

        for (run, split) in splits.iter().enumerate() {
            wtr.write_record([
                run.to_string(),
                split.train.start.to_string(),
                split.train.end.to_string(),
                split.test.start.to_string(),
                split.test.end.to_string(),
            ])
            .map_err(|e| write_error(output_path, e))?;
        }

        wtr.flush().map_err(|e| write_error(output_path, e))?;
        Ok(())
    }

    fn write_summary(
        &self,
        summary: &ResampleSummary,
        assessment: &Assessment,
        output_path: &Path,
    ) -> Result<(), WfvalError> {
        let mut wtr = csv::Writer::from_path(output_path).map_err(|e| write_error(output_path, e))?;

        wtr.write_record([
            "runs",
            "mean_train_sharpe",
            "mean_test_sharpe",
            "mean_degradation",
            "std_degradation",
            "overfit_rate",
            "verdict",
        ])
        .map_err(|e| write_error(output_path, e))?;

        wtr.write_record([
            summary.runs.to_string(),
            format!("{:.4}", summary.mean_train_sharpe),
            format!("{:.4}", summary.mean_test_sharpe),
            format!("{:.4}", summary.mean_degradation),
            format!("{:.4}", summary.std_degradation),
            format!("{:.4}", summary.overfit_rate),
            assessment.verdict.to_string(),
        ])
        .map_err(|e| write_error(output_path, e))?;

        wtr.flush().map_err(|e| write_error(output_path, e))?;
        Ok(())
    }
}
