//! CLI integration tests for plan construction.
//!
//! Tests cover:
//! - Config parsing (build_resample_plan) with real INI files on disk
//! - Missing/invalid key reporting with section and key named
//! - Override-free defaults (runs, seed)
//! - Plans feeding the generator end-to-end

mod common;

use chrono::Duration;
use common::*;
use wfval::adapters::file_config_adapter::FileConfigAdapter;
use wfval::cli;
use wfval::domain::error::WfvalError;
use wfval::domain::split::generate_split;

mod plan_building {
    use super::*;

    #[test]
    fn build_resample_plan_valid_full() {
        let adapter = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let plan = cli::build_resample_plan(&adapter).unwrap();

        assert_eq!(plan.range.start, date(2022, 1, 1));
        assert_eq!(plan.range.end, date(2024, 12, 31));
        assert!((plan.train_fraction - 0.6).abs() < f64::EPSILON);
        assert_eq!(plan.test_length, Duration::days(180));
        assert_eq!(plan.runs, 20);
        assert_eq!(plan.seed, Some(42));
    }

    #[test]
    fn build_resample_plan_defaults_runs_to_one() {
        let ini = "[history]\nstart_date = 2022-01-01\nend_date = 2024-12-31\n\n[resample]\ntrain_fraction = 0.6\ntest_days = 90\n";
        let adapter = FileConfigAdapter::from_string(ini).unwrap();
        let plan = cli::build_resample_plan(&adapter).unwrap();

        assert_eq!(plan.runs, 1);
        assert_eq!(plan.seed, None);
    }

    #[test]
    fn build_resample_plan_missing_start_date() {
        let ini = "[history]\nend_date = 2024-12-31\n\n[resample]\ntrain_fraction = 0.6\ntest_days = 90\n";
        let adapter = FileConfigAdapter::from_string(ini).unwrap();
        let err = cli::build_resample_plan(&adapter).unwrap_err();
        assert!(
            matches!(err, WfvalError::ConfigMissing { section, key } if section == "history" && key == "start_date")
        );
    }

    #[test]
    fn build_resample_plan_missing_test_days() {
        let ini = "[history]\nstart_date = 2022-01-01\nend_date = 2024-12-31\n\n[resample]\ntrain_fraction = 0.6\n";
        let adapter = FileConfigAdapter::from_string(ini).unwrap();
        let err = cli::build_resample_plan(&adapter).unwrap_err();
        assert!(matches!(err, WfvalError::ConfigMissing { key, .. } if key == "test_days"));
    }

    #[test]
    fn build_resample_plan_invalid_date_format() {
        let ini = "[history]\nstart_date = 01/01/2022\nend_date = 2024-12-31\n\n[resample]\ntrain_fraction = 0.6\ntest_days = 90\n";
        let adapter = FileConfigAdapter::from_string(ini).unwrap();
        let err = cli::build_resample_plan(&adapter).unwrap_err();
        assert!(matches!(err, WfvalError::ConfigInvalid { key, .. } if key == "start_date"));
    }

    #[test]
    fn build_resample_plan_rejects_out_of_range_fraction() {
        let ini = "[history]\nstart_date = 2022-01-01\nend_date = 2024-12-31\n\n[resample]\ntrain_fraction = 1.2\ntest_days = 90\n";
        let adapter = FileConfigAdapter::from_string(ini).unwrap();
        let err = cli::build_resample_plan(&adapter).unwrap_err();
        assert!(matches!(err, WfvalError::ConfigInvalid { key, .. } if key == "train_fraction"));
    }

    #[test]
    fn build_resample_plan_from_file_on_disk() {
        let file = write_temp_ini(VALID_INI);
        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        let plan = cli::build_resample_plan(&adapter).unwrap();
        assert_eq!(plan.runs, 20);
    }
}

mod plan_to_generator {
    use super::*;

    #[test]
    fn configured_plan_generates_valid_splits() {
        let adapter = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let plan = cli::build_resample_plan(&adapter).unwrap();

        let split = generate_split(&plan.request_for_run(0)).unwrap();
        assert_eq!(split.train.start, plan.range.start);
        assert!(split.test.end <= plan.range.end);
    }

    #[test]
    fn plan_with_oversized_test_window_fails_at_generation() {
        let ini = "[history]\nstart_date = 2024-01-01\nend_date = 2024-06-01\n\n[resample]\ntrain_fraction = 0.6\ntest_days = 400\n";
        let adapter = FileConfigAdapter::from_string(ini).unwrap();
        let plan = cli::build_resample_plan(&adapter).unwrap();

        let err = generate_split(&plan.request_for_run(0)).unwrap_err();
        assert!(matches!(err, WfvalError::InsufficientHistory { .. }));
    }
}
