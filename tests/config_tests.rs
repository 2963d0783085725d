use ipaas::config;
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

// Tests in this file share the process environment.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("http://vano.my-wan:8080/"),
        "http://vano.my-wan:8080"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("http://vano.my-wan:8080///"),
        "http://vano.my-wan:8080"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  http://vano.my-wan:8080/  "),
        "http://vano.my-wan:8080"
    );
}

#[test]
fn test_sanitize_base_url_empty_string() {
    assert_eq!(config::sanitize_base_url(""), "http://localhost:8080");
    assert_eq!(config::sanitize_base_url("   "), "http://localhost:8080");
}

#[test]
fn test_parse_millis_fallbacks() {
    assert_eq!(config::parse_millis(None, 600), 600);
    assert_eq!(config::parse_millis(Some("abc"), 600), 600);
    assert_eq!(config::parse_millis(Some("0"), 600), 600);
    assert_eq!(config::parse_millis(Some("-5"), 600), 600);
    assert_eq!(config::parse_millis(Some(" 250 "), 600), 250);
}

#[test]
fn test_get_base_url_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::set_var("IPAAS_BASE_URL", "https://paas.example.org/");

    assert_eq!(config::get_base_url(), "https://paas.example.org");

    env::remove_var("IPAAS_BASE_URL");
}

#[test]
fn test_get_base_url_uses_default() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::remove_var("IPAAS_BASE_URL");

    assert_eq!(config::get_base_url(), config::DEFAULT_BASE_URL);
}

#[test]
fn test_app_host_defaults_to_backend_host() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::set_var("IPAAS_BASE_URL", "http://vano.my-wan:8080");
    env::remove_var("IPAAS_APP_HOST");

    assert_eq!(config::get_app_host(), "vano.my-wan");

    env::set_var("IPAAS_APP_HOST", "apps.example.org");
    assert_eq!(config::get_app_host(), "apps.example.org");

    env::remove_var("IPAAS_APP_HOST");
    env::remove_var("IPAAS_BASE_URL");
}

#[test]
fn test_credentials_path() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::remove_var("IPAAS_CREDENTIALS_FILE");
    assert_eq!(config::get_credentials_path(), PathBuf::from("credentials.json"));

    env::set_var("IPAAS_CREDENTIALS_FILE", "/tmp/ipaas/session.json");
    assert_eq!(config::get_credentials_path(), PathBuf::from("/tmp/ipaas/session.json"));

    env::remove_var("IPAAS_CREDENTIALS_FILE");
}

#[test]
fn test_durations_from_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    env::remove_var("IPAAS_VALIDATE_DEBOUNCE_MS");
    env::set_var("IPAAS_PUBLIC_POLL_INTERVAL_MS", "not-a-number");

    assert_eq!(config::get_validate_debounce(), Duration::from_millis(600));
    assert_eq!(config::get_public_poll_interval(), Duration::from_millis(5000));

    env::set_var("IPAAS_VALIDATE_DEBOUNCE_MS", "50");
    assert_eq!(config::get_validate_debounce(), Duration::from_millis(50));

    env::remove_var("IPAAS_VALIDATE_DEBOUNCE_MS");
    env::remove_var("IPAAS_PUBLIC_POLL_INTERVAL_MS");
}
