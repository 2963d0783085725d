use cookie::Cookie;
use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use time::OffsetDateTime;

use super::client::ApiClient;
use super::error::ApiError;
use crate::models::{CredentialPair, ACCESS_COOKIE, REFRESH_COOKIE};

pub const REFRESH_ENDPOINT: &str = "/api/tokens/new";

/// `data` of a successful refresh.
#[derive(Debug, Deserialize)]
struct TokenPairPayload {
    #[serde(rename = "ipaas-access-token")]
    access_token: String,
    #[serde(rename = "ipaas-refresh-token")]
    refresh_token: String,
}

/// Exchanges the refresh token (sent as a cookie) for a new pair and stores it.
pub async fn refresh_tokens(client: &ApiClient) -> Result<(), ApiError> {
    tracing::info!(op = "session.refresh", "Requesting a new token pair");
    let raw = client.send(Method::GET, REFRESH_ENDPOINT, None).await?;
    if raw.envelope.is_error() {
        let message = raw.envelope.message();
        tracing::warn!(
            op = "session.refresh.failed",
            code = ?raw.envelope.code,
            "Token refresh failed: {}",
            message
        );
        return Err(ApiError::RefreshFailed(message));
    }

    let pair = pair_from_data(raw.envelope.data.as_ref())
        .or_else(|| pair_from_cookies(&raw.set_cookies))
        .ok_or_else(|| ApiError::RefreshFailed("the backend did not send a new token pair".into()))?;
    client.credentials().replace(pair).await?;
    tracing::info!(op = "session.refresh.success", "Token refresh succeeded");
    Ok(())
}

fn pair_from_data(data: Option<&Value>) -> Option<CredentialPair> {
    let payload = serde_json::from_value::<TokenPairPayload>(data?.clone()).ok()?;
    if payload.access_token.is_empty() || payload.refresh_token.is_empty() {
        return None;
    }
    Some(CredentialPair::new(payload.access_token, payload.refresh_token))
}

/// The backend first expires the old cookies and then sets the new ones in
/// the same response; only live, non-empty cookies count.
pub fn pair_from_cookies(cookies: &[Cookie<'static>]) -> Option<CredentialPair> {
    let now = OffsetDateTime::now_utc();
    let live = |name: &str| {
        cookies
            .iter()
            .filter(|c| c.name() == name && !c.value().is_empty())
            .filter(|c| c.expires_datetime().map(|at| at > now).unwrap_or(true))
            .last()
            .map(|c| c.value().to_string())
    };
    Some(CredentialPair::new(live(ACCESS_COOKIE)?, live(REFRESH_COOKIE)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Cookie<'static> {
        Cookie::parse(raw.to_string()).unwrap()
    }

    #[test]
    fn expired_deletion_cookies_are_skipped() {
        let cookies = vec![
            parse("ipaas-access-token=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT"),
            parse("ipaas-refresh-token=; Path=/; Expires=Thu, 01 Jan 1970 00:00:00 GMT"),
            parse("ipaas-access-token=new-acc; Path=/"),
            parse("ipaas-refresh-token=new-ref; Path=/"),
        ];
        let pair = pair_from_cookies(&cookies).unwrap();
        assert_eq!(pair.access_token, "new-acc");
        assert_eq!(pair.refresh_token, "new-ref");
    }

    #[test]
    fn half_a_pair_is_nothing() {
        let cookies = vec![parse("ipaas-access-token=only; Path=/")];
        assert!(pair_from_cookies(&cookies).is_none());
    }

    #[test]
    fn data_payload_uses_cookie_names() {
        let data = serde_json::json!({"ipaas-access-token": "a", "ipaas-refresh-token": "r"});
        let pair = pair_from_data(Some(&data)).unwrap();
        assert_eq!((pair.access_token.as_str(), pair.refresh_token.as_str()), ("a", "r"));
        assert!(pair_from_data(None).is_none());
    }
}
