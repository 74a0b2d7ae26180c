//! Configuration files through the admin commands.

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use url_pointers::commands::{Mode, cmd_check, cmd_export, load};
use url_pointers::config::{ConfigSchema, Environment, ServerConfig, StandaloneConfig};

use crate::common::{base_server_json, server_config};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn check(mode: Mode, file: &NamedTempFile, env: &Environment) -> anyhow::Result<String> {
    let mut out = Vec::new();
    cmd_check(mode, Some(file.path()), env, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_check_server_file() {
    let file = write_config(&base_server_json().to_string());

    let output = check(Mode::Server, &file, &Environment::new()).unwrap();

    assert!(output.contains("configuration OK (server)"));
    assert!(output.contains("providers: google, test"));
}

#[test]
fn test_check_standalone_file() {
    let file = write_config(
        &json!({
            "PORT": 8080,
            "redirectUrl": "https://example.com/",
            "GOOGLE_CLIENT_ID": "client-id",
            "GOOGLE_CLIENT_SECRET": "client-secret",
            "SESSION_SECRET": "session secret",
            "domains": ["acm.org"]
        })
        .to_string(),
    );

    let output = check(Mode::Standalone, &file, &Environment::new()).unwrap();

    assert!(output.contains("configuration OK (standalone)"));
    assert!(output.contains("redirect url: https://example.com/"));
    assert!(output.contains("providers: google"));
}

#[test]
fn test_check_empty_standalone_file() {
    let file = write_config("{}");

    let err = check(Mode::Standalone, &file, &Environment::new()).unwrap_err();

    assert_eq!(
        err.to_string(),
        [
            "Invalid configuration:",
            "missing PORT",
            "missing redirectUrl",
            "missing GOOGLE_CLIENT_ID",
            "missing GOOGLE_CLIENT_SECRET",
            "missing SESSION_SECRET",
            r#"at least one of "users" or "domains" must be specified"#,
        ]
        .join("\n  ")
    );
}

#[test]
fn test_environment_completes_a_partial_file() {
    let file = write_config(r#"{"PORT": 3000, "AUTH_PROVIDERS": ["test"]}"#);
    let env = Environment::new()
        .with("SESSION_SECRET", "from the environment")
        .with("domains", "acm.org,example.com");

    let config: ServerConfig = load(Some(file.path()), &env).unwrap();

    assert_eq!(config.session_secret, "from the environment");
    assert_eq!(
        config.domains,
        Some(vec!["acm.org".to_string(), "example.com".to_string()])
    );
}

#[test]
fn test_invalid_json_file() {
    let file = write_config("{ not json");

    let err = check(Mode::Server, &file, &Environment::new()).unwrap_err();

    assert!(
        err.to_string()
            .starts_with("failed to load configuration: invalid JSON: "),
        "{err}"
    );
}

#[test]
fn test_export_feeds_back_through_the_environment() {
    let file = write_config(&base_server_json().to_string());
    let mut out = Vec::new();
    cmd_export(Mode::Server, Some(file.path()), &Environment::new(), false, &mut out).unwrap();

    let env: Environment = String::from_utf8(out)
        .unwrap()
        .lines()
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    let restored = ServerConfig::from_value(&json!({}), &env).unwrap();
    assert_eq!(restored, server_config(&base_server_json()));
}

#[test]
fn test_standalone_export_order() {
    let raw = json!({
        "SESSION_SECRET": "s",
        "PORT": 8080,
        "users": ["mbland@acm.org"],
        "GOOGLE_CLIENT_SECRET": "cs",
        "GOOGLE_CLIENT_ID": "ci",
        "redirectUrl": "https://example.com/"
    });
    let config = StandaloneConfig::from_value(&raw, &Environment::new()).unwrap();

    let names: Vec<String> = config
        .to_env_vars()
        .unwrap()
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    assert_eq!(
        names,
        vec![
            "URL_POINTERS_PORT",
            "URL_POINTERS_redirectUrl",
            "URL_POINTERS_GOOGLE_CLIENT_ID",
            "URL_POINTERS_GOOGLE_CLIENT_SECRET",
            "URL_POINTERS_SESSION_SECRET",
            "URL_POINTERS_users",
        ]
    );
}
