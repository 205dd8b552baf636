//! Tests for the Tally configuration system.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

use tally_core::config::TallyConfig;
use tally_core::errors::{ConfigError, TallyErrorCode};
use tally_core::CostConfig;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all TALLY_ env vars to prevent cross-test contamination.
fn clear_tally_env_vars() {
    for key in [
        "TALLY_BISECTION_TOLERANCE",
        "TALLY_MAX_BISECTION_ITERATIONS",
        "TALLY_CONVOLUTION_ATOMS",
        "TALLY_TABULATION_KNOTS",
        "TALLY_MEMO_CAPACITY",
    ] {
        std::env::remove_var(key);
    }
}

fn hash_of(config: &CostConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn load_without_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tally_env_vars();

    let dir = tempdir();
    let config = TallyConfig::load(dir.path()).unwrap();

    assert_eq!(config.estimate.effective_low_quantile(), 0.10);
    assert_eq!(config.estimate.effective_high_quantile(), 0.75);
    assert_eq!(config.numeric.effective_convolution_atoms(), 256);
    assert_eq!(config.numeric.effective_tabulation_knots(), 512);
    assert_eq!(config.cache.effective_memo_capacity(), 100_000);
    assert!(config.cost_configs.is_empty());
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tally_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("tally.toml"),
        r#"
[numeric]
convolution_atoms = 64
tabulation_knots = 128

[cost_configs.payroll]
unit_name = "dollars"
resource_costs = { engineering = 150.0, design = 120.0 }
"#,
    )
    .unwrap();
    std::env::set_var("TALLY_CONVOLUTION_ATOMS", "32");

    let config = TallyConfig::load(dir.path()).unwrap();

    assert_eq!(config.numeric.convolution_atoms, Some(32));
    assert_eq!(config.numeric.tabulation_knots, Some(128));
    let payroll = config.cost_config("payroll").unwrap();
    assert_eq!(payroll.unit_name(), "dollars");
    assert_eq!(payroll.multiplier("engineering"), 150.0);
    assert_eq!(payroll.multiplier("marketing"), 0.0);

    clear_tally_env_vars();
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_tally_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("tally.toml"), "this is not valid toml {{{{").unwrap();

    match TallyConfig::load(dir.path()).unwrap_err() {
        ConfigError::ParseError { .. } => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn inverted_estimate_quantiles_fail_validation() {
    let err = TallyConfig::from_toml(
        r#"
[estimate]
low_quantile = 0.8
high_quantile = 0.2
"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "estimate.low_quantile"
    ));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn zero_knots_fail_validation() {
    let err = TallyConfig::from_toml("[numeric]\ntabulation_knots = 0\n").unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "numeric.tabulation_knots"
    ));
}

#[test]
fn non_finite_multiplier_fails_validation() {
    let err = TallyConfig::from_toml(
        r#"
[cost_configs.broken]
unit_name = "dollars"
resource_costs = { engineering = nan }
"#,
    )
    .unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "cost_configs.broken.resource_costs.engineering");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
    assert!(CostConfig::new("dollars", [("engineering", f64::INFINITY)]).is_err());
}

#[test]
fn toml_round_trip_preserves_settings() {
    let config = TallyConfig::from_toml(
        r#"
[estimate]
low_quantile = 0.05
high_quantile = 0.95

[cost_configs.hours]
unit_name = "hours"
resource_costs = { engineering = 1.0 }
"#,
    )
    .unwrap();
    let reparsed = TallyConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(reparsed.estimate.low_quantile, Some(0.05));
    assert_eq!(reparsed.estimate.high_quantile, Some(0.95));
    assert_eq!(reparsed.cost_config("hours"), config.cost_config("hours"));
}

#[test]
fn cost_config_identity_ignores_insertion_order() {
    let a = CostConfig::new("dollars", [("engineering", 150.0), ("design", 120.0)]).unwrap();
    let b = CostConfig::new("dollars", [("design", 120.0), ("engineering", 150.0)]).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn cost_config_identity_depends_on_content() {
    let base = CostConfig::new("dollars", [("engineering", 150.0)]).unwrap();
    let other_unit = CostConfig::new("euros", [("engineering", 150.0)]).unwrap();
    let other_rate = CostConfig::new("dollars", [("engineering", 151.0)]).unwrap();
    let extra = CostConfig::new("dollars", [("engineering", 150.0), ("design", 0.0)]).unwrap();
    assert_ne!(base, other_unit);
    assert_ne!(base, other_rate);
    assert_ne!(base, extra);
}

#[test]
fn negative_zero_multiplier_equals_zero() {
    let a = CostConfig::new("dollars", [("design", 0.0)]).unwrap();
    let b = CostConfig::new("dollars", [("design", -0.0)]).unwrap();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
}

#[test]
fn non_positive_multipliers_exclude_resources() {
    let config =
        CostConfig::new("dollars", [("engineering", 2.0), ("design", 0.0), ("ops", -1.0)]).unwrap();
    assert!(config.counts("engineering"));
    assert!(!config.counts("design"));
    assert!(!config.counts("ops"));
    assert!(!config.counts("unlisted"));
}
