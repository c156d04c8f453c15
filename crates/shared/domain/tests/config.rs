use ctf_domain::{ConfigError, Selector, UiConfig};
use std::time::Duration;

#[test]
fn empty_document_yields_defaults() {
    let cfg = UiConfig::from_json("{}").expect("config deserialize");
    assert_eq!(cfg.flash_duration(), Duration::from_millis(5000));
    assert_eq!(cfg.flag_input_id, "flag");
    assert_eq!(cfg.messages.copied, "Link copied to clipboard!");
}

#[test]
fn partial_document_overrides_only_given_fields() {
    let raw = r##"{
        "container_selector": "#content",
        "flash_duration_ms": 1500,
        "messages": { "submitting": "Sending..." }
    }"##;

    let cfg = UiConfig::from_json(raw).expect("config deserialize");
    assert_eq!(cfg.container_selector, Selector::id("content"));
    assert_eq!(cfg.flash_duration(), Duration::from_millis(1500));
    assert_eq!(cfg.messages.submitting, "Sending...");
    assert_eq!(cfg.messages.flag_format, "Flag must be in the format: AITCTF{flag_here}");
    assert_eq!(cfg.flag_form_selector, Selector::class("flag-form"));
}

#[test]
fn unsupported_selector_is_rejected() {
    let err = UiConfig::from_json(r#"{ "form_selector": "main > form" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json { .. }));
    assert!(err.to_string().contains("Failed to parse UI config"));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(UiConfig::from_json("{ not json").is_err());
}
