use kwgroup_core::errors::*;

#[test]
fn config_parse_error_carries_reason() {
    let err = ConfigError::Parse {
        reason: "expected `]`".into(),
    };
    assert!(err.to_string().contains("expected `]`"));
}

#[test]
fn malformed_batch_error_carries_reason() {
    let err = InputError::MalformedBatch {
        reason: "expected array".into(),
    };
    assert!(err.to_string().contains("expected array"));
}

#[test]
fn top_level_error_wraps_subsystem_errors() {
    let err: KwGroupError = InputError::MalformedBatch {
        reason: "eof".into(),
    }
    .into();
    assert!(matches!(err, KwGroupError::Input(_)));
    assert!(err.to_string().starts_with("input error"));

    let err: KwGroupError = ConfigError::Serialize {
        reason: "nope".into(),
    }
    .into();
    assert!(matches!(err, KwGroupError::Config(_)));
}

#[test]
fn question_mark_converts_into_top_level_error() {
    fn load(raw: &str) -> KwGroupResult<usize> {
        let records = kwgroup_core::KeywordRecord::parse_batch(raw)?;
        Ok(records.len())
    }
    assert_eq!(load(r#"[{"query": "x"}]"#).unwrap(), 1);
    assert!(load("{}").is_err());
}
