#![cfg(feature = "serde")]

//! Integration tests for serde support in cadenza.
//!
//! Rate options are the configuration surface: they deserialize from JSON
//! and are then validated into a policy.

use cadenza::control::{InvalidConfiguration, RateMode, RateOptions};
use rstest::rstest;
use std::time::Duration;

// =============================================================================
// RateMode
// =============================================================================

#[rstest]
#[case(RateMode::Debounce, "\"debounce\"")]
#[case(RateMode::Throttle, "\"throttle\"")]
fn test_rate_mode_uses_lowercase_names(#[case] mode: RateMode, #[case] json: &str) {
    assert_eq!(serde_json::to_string(&mode).unwrap(), json);
    assert_eq!(serde_json::from_str::<RateMode>(json).unwrap(), mode);
}

#[rstest]
fn test_rate_mode_rejects_unknown_name() {
    assert!(serde_json::from_str::<RateMode>("\"sample\"").is_err());
}

// =============================================================================
// RateOptions
// =============================================================================

#[rstest]
fn test_rate_options_json_roundtrip() {
    let options = RateOptions::throttle(1000).trailing(false);

    let json = serde_json::to_string(&options).unwrap();
    let restored: RateOptions = serde_json::from_str(&json).unwrap();

    assert_eq!(options, restored);
}

#[rstest]
fn test_rate_options_edges_default_when_omitted() {
    let options: RateOptions =
        serde_json::from_str(r#"{ "mode": "debounce", "interval_ms": 300 }"#).unwrap();

    assert_eq!(options, RateOptions::debounce(300));

    let policy = options.validate().unwrap();
    assert_eq!(policy.interval(), Duration::from_millis(300));
    assert!(!policy.leading());
    assert!(policy.trailing());
}

#[rstest]
fn test_rate_options_explicit_edges() {
    let options: RateOptions = serde_json::from_str(
        r#"{ "mode": "throttle", "interval_ms": 50, "leading": false, "trailing": true }"#,
    )
    .unwrap();

    let policy = options.validate().unwrap();
    assert_eq!(policy.mode(), RateMode::Throttle);
    assert!(!policy.leading());
    assert!(policy.trailing());
}

#[rstest]
#[case(
    r#"{ "mode": "throttle", "interval_ms": -5 }"#,
    InvalidConfiguration::NegativeInterval { interval_ms: -5 }
)]
#[case(
    r#"{ "mode": "debounce", "interval_ms": 10, "leading": false, "trailing": false }"#,
    InvalidConfiguration::NoFiringEdge { mode: RateMode::Debounce }
)]
fn test_deserialized_options_are_still_validated(
    #[case] json: &str,
    #[case] expected: InvalidConfiguration,
) {
    let options: RateOptions = serde_json::from_str(json).unwrap();
    assert_eq!(options.validate(), Err(expected));
}

#[rstest]
fn test_rate_options_require_mode_and_interval() {
    assert!(serde_json::from_str::<RateOptions>(r#"{ "interval_ms": 10 }"#).is_err());
    assert!(serde_json::from_str::<RateOptions>(r#"{ "mode": "throttle" }"#).is_err());
}
