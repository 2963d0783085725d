use chrono::{DateTime, Utc};
use cookie::Cookie;
use serde::{Deserialize, Serialize};

/// Cookie the backend reads the access token from.
pub const ACCESS_COOKIE: &str = "ipaas-access-token";
/// Cookie the backend reads the refresh token from.
pub const REFRESH_COOKIE: &str = "ipaas-refresh-token";

/// The access/refresh token pair that identifies a session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CredentialPair {
    pub access_token: String,
    pub refresh_token: String,
    /// When this pair was stored locally.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl CredentialPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            updated_at: Utc::now(),
        }
    }

    /// Value for the `Cookie` request header.
    pub fn cookie_header(&self) -> String {
        [
            Cookie::new(ACCESS_COOKIE, self.access_token.as_str()),
            Cookie::new(REFRESH_COOKIE, self.refresh_token.as_str()),
        ]
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("; ")
    }
}
