use docchat::presentation::Environment;

#[test]
fn given_known_names_when_parsing_environment_then_is_case_insensitive() {
    assert_eq!(Environment::try_from("LOCAL".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("Production".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_fails() {
    let error = Environment::try_from("staging".to_string()).unwrap_err();

    assert!(error.contains("staging"));
}

#[test]
fn given_environment_when_displaying_then_matches_config_file_name() {
    assert_eq!(Environment::default(), Environment::Local);
    assert_eq!(Environment::Prod.to_string(), "prod");
    assert_eq!(Environment::Test.as_str(), "test");
}
