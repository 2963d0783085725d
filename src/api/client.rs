use std::sync::atomic::{AtomicBool, Ordering};

use cookie::Cookie;
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use yansi::Paint;

use super::envelope::{Envelope, Reply};
use super::error::ApiError;
use super::tokens::refresh_tokens;
use crate::services::credential_store::CredentialStore;
use crate::services::session_service::SessionGuard;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Shortens a token for the request trace.
fn mask(token: &str) -> String {
    let head: String = token.chars().take(6).collect();
    if head.len() < token.len() {
        format!("{}…", head)
    } else {
        head
    }
}

/// Response keys that carry a token.
const TOKEN_KEYS: [&str; 5] = [
    "ipaas-access-token",
    "ipaas-refresh-token",
    "accessToken",
    "refreshToken",
    "refreshToke",
];

fn mask_tokens(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map.iter_mut() {
                match v {
                    Value::String(token) if TOKEN_KEYS.contains(&key.as_str()) => *token = mask(token),
                    other => mask_tokens(other),
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(mask_tokens),
        _ => {}
    }
}

/// Body as printed in the trace, with token values shortened.
fn masked_body(body: &[u8]) -> String {
    match serde_json::from_slice::<Value>(body) {
        Ok(mut value) => {
            mask_tokens(&mut value);
            serde_json::to_string(&value).unwrap_or_default()
        }
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    }
}

fn log_request(method: &Method, url: &str, cookies: Option<&str>, body: Option<&Value>) {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method.as_str()).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));

    if let Some(raw) = cookies {
        let masked = raw
            .split("; ")
            .filter_map(|c| c.split_once('='))
            .map(|(name, value)| format!("{}={}", name, mask(value)))
            .collect::<Vec<_>>()
            .join("; ");
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new(format!("'Cookie: {}'", masked)).fg(yansi::Color::Magenta)
        ));
    }
    if let Some(b) = body {
        parts.push(format!("{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
        ));
        let json_str = serde_json::to_string(b).unwrap_or_default();
        let escaped_json = json_str.replace('\'', "'\\''");
        parts.push(format!("{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    log_output(format!("Request:\n{}", parts.join(" ")));
}

fn log_response(status: u16, body: &[u8]) {
    let text = masked_body(body);
    // Grayed out color (dimmed/dark gray)
    let response_str = Paint::new(format!("{} {}", status, text)).rgb(100, 100, 100).to_string();
    log_output(format!("Response:\n{}", response_str));
}

/// One round trip, before the envelope is interpreted.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub set_cookies: Vec<Cookie<'static>>,
    pub envelope: Envelope<Value>,
}

/// HTTP client for the ipaas backend.
///
/// Authenticated calls ([`ApiClient::request`]) go through the session guard,
/// so an expired access token is refreshed and the call replayed once without
/// any help from the caller.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: CredentialStore,
    session: SessionGuard,
}

impl ApiClient {
    pub fn new(base_url: &str, credentials: CredentialStore) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("ipaas/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http(http, base_url, credentials))
    }

    pub fn with_http(http: reqwest::Client, base_url: &str, credentials: CredentialStore) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            session: SessionGuard::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn session(&self) -> &SessionGuard {
        &self.session
    }

    /// Authenticated call with session refresh.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Reply<T>, ApiError> {
        self.session
            .run(
                || self.request_once::<T>(method.clone(), endpoint, body.clone()),
                || refresh_tokens(self),
            )
            .await
    }

    /// Single attempt without session handling (public endpoints, token refresh).
    pub async fn request_once<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<Reply<T>, ApiError> {
        self.send(method, endpoint, body).await?.envelope.into_reply()
    }

    /// Sends the request with the stored cookies and parses the envelope.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<RawResponse, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let cookies = self.credentials.cookie_header();
        log_request(&method, &url, cookies.as_deref(), body.as_ref());
        tracing::info!(method = %method, endpoint, "API request");

        let mut req = self.http.request(method, url.as_str());
        if let Some(ref c) = cookies {
            req = req.header(COOKIE, c);
        }
        if let Some(ref b) = body {
            req = req.json(b);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let set_cookies = resp
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|raw| Cookie::parse(raw.to_string()).ok())
            .collect();
        let bytes = resp.bytes().await?;
        log_response(status, &bytes);

        let envelope = match serde_json::from_slice::<Envelope<Value>>(&bytes) {
            Ok(env) => env,
            Err(e) => {
                tracing::warn!(%e, status, endpoint, "Response is not an envelope");
                return Err(ApiError::UnexpectedResponse {
                    status,
                    body: String::from_utf8_lossy(&bytes).trim().to_string(),
                });
            }
        };
        tracing::info!(status, error = envelope.is_error(), code = ?envelope.code, "API response");
        Ok(RawResponse {
            status,
            set_cookies,
            envelope,
        })
    }
}
