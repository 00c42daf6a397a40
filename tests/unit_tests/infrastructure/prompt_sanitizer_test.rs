use docchat::infrastructure::observability::sanitize_prompt;

#[test]
fn given_blank_prompt_when_sanitizing_then_marks_it_empty() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt("   \n"), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_keeps_it() {
    assert_eq!(sanitize_prompt("  what is in the file?  "), "what is in the file?");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_total_length() {
    let prompt = "é".repeat(150);

    let sanitized = sanitize_prompt(&prompt);

    assert_eq!(sanitized, format!("{}... (150 chars total)", "é".repeat(100)));
}

#[test]
fn given_credentials_when_sanitizing_then_every_value_is_redacted() {
    let sanitized =
        sanitize_prompt("use Bearer abc123 with api_key=xyz&token=t1 and token=t2 please");

    assert_eq!(
        sanitized,
        "use Bearer [REDACTED] with api_key=[REDACTED]&token=[REDACTED] and token=[REDACTED] please"
    );
}
