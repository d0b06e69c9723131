//! Configuration validation.
//!
//! Validates every resampling field before any split is generated.

use crate::domain::error::WfvalError;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

pub fn validate_resample_config(config: &dyn ConfigPort) -> Result<(), WfvalError> {
    validate_history_dates(config)?;
    validate_train_fraction(config)?;
    validate_test_days(config)?;
    validate_runs(config)?;
    validate_seed(config)?;
    Ok(())
}

fn validate_history_dates(config: &dyn ConfigPort) -> Result<(), WfvalError> {
    let start_str = config.get_string("history", "start_date");
    let end_str = config.get_string("history", "end_date");

    let start_date = parse_date(start_str.as_deref(), "start_date")?;
    let end_date = parse_date(end_str.as_deref(), "end_date")?;

    if start_date >= end_date {
        return Err(WfvalError::ConfigInvalid {
            section: "history".to_string(),
            key: "start_date".to_string(),
            reason: "start_date must be before end_date".to_string(),
        });
    }
    Ok(())
}

fn parse_date(value: Option<&str>, field: &str) -> Result<NaiveDate, WfvalError> {
    match value {
        None => Err(WfvalError::ConfigMissing {
            section: "history".to_string(),
            key: field.to_string(),
        }),
        Some(s) => {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| WfvalError::ConfigInvalid {
                section: "history".to_string(),
                key: field.to_string(),
                reason: format!("invalid {} format, expected YYYY-MM-DD", field),
            })
        }
    }
}

fn validate_train_fraction(config: &dyn ConfigPort) -> Result<(), WfvalError> {
    if config.get_string("resample", "train_fraction").is_none() {
        return Err(WfvalError::ConfigMissing {
            section: "resample".to_string(),
            key: "train_fraction".to_string(),
        });
    }
    let value = config.get_double("resample", "train_fraction", -1.0);
    if value <= 0.0 || value >= 1.0 {
        return Err(WfvalError::ConfigInvalid {
            section: "resample".to_string(),
            key: "train_fraction".to_string(),
            reason: "train_fraction must be strictly between 0 and 1".to_string(),
        });
    }
    Ok(())
}

fn validate_test_days(config: &dyn ConfigPort) -> Result<(), WfvalError> {
    if config.get_string("resample", "test_days").is_none() {
        return Err(WfvalError::ConfigMissing {
            section: "resample".to_string(),
            key: "test_days".to_string(),
        });
    }
    let value = config.get_int("resample", "test_days", 0);
    if value < 1 {
        return Err(WfvalError::ConfigInvalid {
            section: "resample".to_string(),
            key: "test_days".to_string(),
            reason: "test_days must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_runs(config: &dyn ConfigPort) -> Result<(), WfvalError> {
    let value = config.get_int("resample", "runs", 1);
    if value < 1 {
        return Err(WfvalError::ConfigInvalid {
            section: "resample".to_string(),
            key: "runs".to_string(),
            reason: "runs must be at least 1".to_string(),
        });
    }
    Ok(())
}

fn validate_seed(config: &dyn ConfigPort) -> Result<(), WfvalError> {
    match config.get_string("resample", "seed") {
        None => Ok(()),
        Some(s) => match s.trim().parse::<u64>() {
            Ok(_) => Ok(()),
            Err(_) => Err(WfvalError::ConfigInvalid {
                section: "resample".to_string(),
                key: "seed".to_string(),
                reason: "seed must be a non-negative integer".to_string(),
            }),
        },
    }
}
