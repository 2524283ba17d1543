use irs_core::errors::{ErrorInfo, IrsError};
use irs_core::{require_finite, require_non_negative, require_positive};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("field", "h0")
        .with_context("value", "0")
}

#[test]
fn config_error_surface() {
    let err = IrsError::Config(sample_info("C001", "h0 must be positive"));
    assert_eq!(err.info().code, "C001");
    assert!(err.info().context.contains_key("field"));
    assert!(err.is_config());
    assert!(!err.is_domain());
}

#[test]
fn domain_error_surface() {
    let err = IrsError::Domain(sample_info("D001", "radius must be positive"));
    assert_eq!(err.info().code, "D001");
    assert!(err.is_domain());
}

#[test]
fn display_includes_context_and_hint() {
    let err = IrsError::Config(sample_info("C002", "bad window").with_hint("shrink nperseg"));
    let rendered = err.to_string();
    assert!(rendered.starts_with("configuration error: bad window (code: C002)"));
    assert!(rendered.contains("field=h0"));
    assert!(rendered.contains("hint: shrink nperseg"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = IrsError::Domain(ErrorInfo::new("D002", "negative mass"));
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Domain");
    assert_eq!(json["detail"]["code"], "D002");
    let decoded: IrsError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn validators_reject_bad_values() {
    assert!(require_finite("x", f64::NAN).unwrap_err().is_config());
    assert!(require_positive("h0", 0.0).unwrap_err().is_config());
    assert!(require_positive("h0", -1.0).is_err());
    assert_eq!(require_positive("h0", 67.4).expect("positive"), 67.4);
    assert_eq!(require_non_negative("noise", 0.0).expect("zero"), 0.0);
    let err = require_non_negative("noise", -0.1).unwrap_err();
    assert_eq!(err.info().code, "negative-parameter");
    assert_eq!(err.info().context["field"], "noise");
}
