use mc_domain::config::{ApiConfig, Config, ConfigSeverity};
use std::path::Path;

#[test]
fn default_session_identity() {
    let config = Config::default();
    assert_eq!(config.session.user_name, "You");
    assert_eq!(config.session.default_bot_name, "Harry Potter");
    assert_eq!(config.session.bot_name_file, Path::new("bot_name.txt"));
}

#[test]
fn default_api_env_names() {
    let config = Config::default();
    assert_eq!(config.api.endpoint_env, "CHATBOT_API_URL");
    assert_eq!(config.api.api_key_env, "CHATBOT_API_KEY");
    assert_eq!(config.api.timeout_ms, 30_000);
    assert_eq!(config.api.max_retries, 0);
}

#[test]
fn empty_toml_gives_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.session.user_name, "You");
    assert!(config.api.endpoint.is_none());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let toml_str = r#"
[api]
endpoint = "https://chat.example.com/v1/chat"
timeout_ms = 5000

[session]
default_bot_name = "Hermione"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(
        config.api.endpoint.as_deref(),
        Some("https://chat.example.com/v1/chat")
    );
    assert_eq!(config.api.timeout_ms, 5000);
    assert_eq!(config.api.api_key_env, "CHATBOT_API_KEY");
    assert_eq!(config.session.default_bot_name, "Hermione");
    assert_eq!(config.session.user_name, "You");
}

#[test]
fn resolve_reads_named_env_vars() {
    let api = ApiConfig::default();
    let resolved = api.resolve_with(|name| match name {
        "CHATBOT_API_URL" => Some("https://env.example.com".into()),
        "CHATBOT_API_KEY" => Some("secret".into()),
        _ => None,
    });
    assert_eq!(resolved.endpoint, "https://env.example.com");
    assert_eq!(resolved.api_key, "secret");
}

#[test]
fn inline_values_beat_env() {
    let api = ApiConfig {
        endpoint: Some("https://inline.example.com".into()),
        api_key: Some("inline-key".into()),
        ..ApiConfig::default()
    };
    let resolved = api.resolve_with(|_| Some("from-env".into()));
    assert_eq!(resolved.endpoint, "https://inline.example.com");
    assert_eq!(resolved.api_key, "inline-key");
}

#[test]
fn missing_env_resolves_to_empty_strings() {
    let resolved = ApiConfig::default().resolve_with(|_| None);
    assert_eq!(resolved.endpoint, "");
    assert_eq!(resolved.api_key, "");
}

#[test]
fn validate_flags_zero_timeout_and_blank_user() {
    let mut config = Config::default();
    config.api.endpoint = Some("https://chat.example.com".into());
    config.api.api_key = Some("k".into());
    config.api.timeout_ms = 0;
    config.session.user_name = "  ".into();

    let issues = config.validate();
    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == ConfigSeverity::Error)
        .map(|i| i.field.as_str())
        .collect();
    assert_eq!(errors, vec!["api.timeout_ms", "session.user_name"]);
}

#[test]
fn validate_clean_config_has_no_issues() {
    let mut config = Config::default();
    config.api.endpoint = Some("https://chat.example.com".into());
    config.api.api_key = Some("k".into());
    assert!(config.validate().is_empty());
}
