use docchat::application::ErrorKind;

#[test]
fn given_error_kinds_when_serializing_then_uses_snake_case_names() {
    let kinds = [
        (ErrorKind::InvalidInput, "invalid_input"),
        (ErrorKind::ExtractionError, "extraction_error"),
        (ErrorKind::UpstreamError, "upstream_error"),
        (ErrorKind::InternalError, "internal_error"),
    ];

    for (kind, name) in kinds {
        assert_eq!(kind.as_str(), name);
        assert_eq!(serde_json::to_value(kind).unwrap(), serde_json::json!(name));
    }
}

#[test]
fn given_error_kinds_when_classifying_then_only_invalid_input_is_client_error() {
    assert!(ErrorKind::InvalidInput.is_client_error());
    assert!(!ErrorKind::ExtractionError.is_client_error());
    assert!(!ErrorKind::UpstreamError.is_client_error());
    assert!(!ErrorKind::InternalError.is_client_error());
}
