use reqwest::Method;
use serde::Deserialize;

use super::client::ApiClient;
use super::error::ApiError;
use crate::models::CredentialPair;
use crate::utils::path_segment;

/// Outcome of one poll of the OAuth login state.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginPoll {
    /// The user has not finished logging in in the browser yet.
    Pending,
    LoggedIn(CredentialPair),
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginState {
    #[serde(default)]
    logged_in: bool,
    #[serde(default)]
    access_token: Option<String>,
    // the backend spells this key both ways
    #[serde(default, alias = "refreshToke")]
    refresh_token: Option<String>,
}

/// Polls `/api/oauth/check/{id}` once. A polling id can be redeemed only once.
pub async fn check_login(client: &ApiClient, polling_id: &str) -> Result<LoginPoll, ApiError> {
    let endpoint = format!("/api/oauth/check/{}", path_segment(polling_id));
    let raw = client.send(Method::GET, &endpoint, None).await?;
    let state = raw
        .envelope
        .data
        .clone()
        .and_then(|d| serde_json::from_value::<LoginState>(d).ok())
        .unwrap_or_default();

    if raw.envelope.is_error() {
        // "not logged in yet" carries `loggedIn: false`; anything else is final
        let still_waiting = raw
            .envelope
            .data
            .as_ref()
            .and_then(|d| d.get("loggedIn"))
            .and_then(|v| v.as_bool())
            == Some(false);
        if still_waiting {
            return Ok(LoginPoll::Pending);
        }
        return Err(raw.envelope.into_error());
    }
    if !state.logged_in {
        return Ok(LoginPoll::Pending);
    }
    match (state.access_token, state.refresh_token) {
        (Some(access), Some(refresh)) if !access.is_empty() && !refresh.is_empty() => {
            Ok(LoginPoll::LoggedIn(CredentialPair::new(access, refresh)))
        }
        _ => Err(ApiError::Rejected {
            code: None,
            message: "Login finished but no token pair was returned".into(),
        }),
    }
}
