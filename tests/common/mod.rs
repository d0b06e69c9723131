#![allow(dead_code)]

use chrono::NaiveDate;
use std::io::Write;
use wfval::domain::error::WfvalError;
use wfval::domain::trial::TrialRecord;
use wfval::ports::trial_port::TrialPort;

pub struct MockTrialPort {
    pub trials: Vec<TrialRecord>,
    pub error: Option<String>,
}

impl MockTrialPort {
    pub fn new(trials: Vec<TrialRecord>) -> Self {
        Self {
            trials,
            error: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            trials: Vec::new(),
            error: Some(reason.to_string()),
        }
    }
}

impl TrialPort for MockTrialPort {
    fn read_trials(&self) -> Result<Vec<TrialRecord>, WfvalError> {
        if let Some(reason) = &self.error {
            return Err(WfvalError::TrialData {
                file: "mock".to_string(),
                reason: reason.clone(),
            });
        }
        Ok(self.trials.clone())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_trial(run: u32, train_sharpe: f64, test_sharpe: f64) -> TrialRecord {
    TrialRecord {
        run,
        train_sharpe,
        test_sharpe,
        train_trades: 40,
        test_trades: 25,
    }
}

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn write_temp_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub const VALID_INI: &str = r#"
[history]
start_date = 2022-01-01
end_date = 2024-12-31

[resample]
train_fraction = 0.6
test_days = 180
runs = 20
seed = 42
"#;
