use chronos::*;

#[test]
fn deserialize_partial_config() {
    let json_string = r#"{
            "decimal_precision": 3
        }"#;
    let config: Config = serde_json::from_str(json_string).unwrap();
    assert_eq!(config.decimal_precision, 3);
    assert_eq!(config.default_label.as_str(), "default");
}

#[test]
fn deserialize_full_config() {
    let json_string = r#"{
            "decimal_precision": 0,
            "default_label": "main"
        }"#;
    let config: Config = serde_json::from_str(json_string).unwrap();
    assert_eq!(
        config,
        Config {
            decimal_precision: 0,
            default_label: "main".parse().unwrap(),
        }
    );
}

#[test]
fn deserialize_config_failures() {
    for json_string in [
        r#"{ "default_label": "" }"#,
        r#"{ "decimal_precision": -1 }"#,
        r#"{ "precision": 2 }"#,
    ] {
        let config: Result<Config, _> = serde_json::from_str(json_string);
        assert!(config.is_err(), "{json_string} should not deserialize");
    }
}

#[test]
fn deserialize_multiline_default_label() {
    let config: Config = serde_json::from_str(r#"{ "default_label": "two\nlines" }"#).unwrap();
    assert_eq!(config.default_label.as_str(), "two\nlines");
}

#[test]
fn label_serializes_as_plain_string() {
    let label: Label = "build".parse().unwrap();
    assert_eq!(serde_json::to_string(&label).unwrap(), r#""build""#);
    let back: Label = serde_json::from_str(r#""build""#).unwrap();
    assert_eq!(back, label);
}
