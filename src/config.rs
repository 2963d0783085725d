use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::host_without_port;

// Default configuration constants
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_CREDENTIALS_FILE: &str = "credentials.json";
pub const DEFAULT_VALIDATE_DEBOUNCE_MS: u64 = 600;
pub const DEFAULT_PUBLIC_POLL_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_LOGIN_POLL_INTERVAL_MS: u64 = 2000;
pub const DEFAULT_LOGIN_POLL_ATTEMPTS: u32 = 90;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_base_url() -> String {
    sanitize_base_url(&env::var("IPAAS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()))
}

pub fn get_credentials_path() -> PathBuf {
    let raw = env::var("IPAAS_CREDENTIALS_FILE").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        PathBuf::from(DEFAULT_CREDENTIALS_FILE)
    } else {
        PathBuf::from(trimmed)
    }
}

/// Host used to build links to deployed applications.
pub fn get_app_host() -> String {
    let raw = env::var("IPAAS_APP_HOST").unwrap_or_default();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        host_without_port(&get_base_url())
    } else {
        trimmed.to_string()
    }
}

pub fn get_validate_debounce() -> Duration {
    millis_from_env("IPAAS_VALIDATE_DEBOUNCE_MS", DEFAULT_VALIDATE_DEBOUNCE_MS)
}

pub fn get_public_poll_interval() -> Duration {
    millis_from_env("IPAAS_PUBLIC_POLL_INTERVAL_MS", DEFAULT_PUBLIC_POLL_INTERVAL_MS)
}

pub fn get_login_poll_interval() -> Duration {
    millis_from_env("IPAAS_LOGIN_POLL_INTERVAL_MS", DEFAULT_LOGIN_POLL_INTERVAL_MS)
}

fn millis_from_env(key: &str, default_ms: u64) -> Duration {
    Duration::from_millis(parse_millis(env::var(key).ok().as_deref(), default_ms))
}

/// Parses a millisecond count; missing, malformed, or zero values use the default.
pub fn parse_millis(raw: Option<&str>, default_ms: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(default_ms)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
