//! Domain error types.

/// Top-level error type for wfval.
#[derive(Debug, thiserror::Error)]
pub enum WfvalError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error(
        "insufficient history: {total_days} days cannot fit {train_days} training days plus {test_days} test days"
    )]
    InsufficientHistory {
        total_days: i64,
        train_days: i64,
        test_days: i64,
    },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("trial data error in {file}: {reason}")]
    TrialData { file: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&WfvalError> for std::process::ExitCode {
    fn from(err: &WfvalError) -> Self {
        let code: u8 = match err {
            WfvalError::Io(_) => 1,
            WfvalError::ConfigParse { .. }
            | WfvalError::ConfigMissing { .. }
            | WfvalError::ConfigInvalid { .. } => 2,
            WfvalError::TrialData { .. } => 3,
            WfvalError::InvalidInput { .. } => 4,
            WfvalError::InsufficientHistory { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
