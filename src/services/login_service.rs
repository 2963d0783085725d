use std::time::Duration;

use crate::api::{check_login, ApiClient, ApiError, LoginPoll};
use crate::models::CredentialPair;

/// Polls the OAuth login state until the browser flow completes, then stores
/// the pair. Gives up after `attempts` polls.
pub async fn wait_for_login(
    client: &ApiClient,
    polling_id: &str,
    interval: Duration,
    attempts: u32,
) -> Result<CredentialPair, ApiError> {
    for attempt in 1..=attempts.max(1) {
        match check_login(client, polling_id).await? {
            LoginPoll::LoggedIn(pair) => {
                client.credentials().replace(pair.clone()).await?;
                tracing::info!(op = "session.login.success", attempt, "Logged in");
                return Ok(pair);
            }
            LoginPoll::Pending => {
                tracing::debug!(attempt, "Login still pending");
                if attempt < attempts {
                    tokio::time::sleep(interval).await;
                }
            }
        }
    }
    Err(ApiError::Rejected {
        code: None,
        message: format!("Login was not completed after {} attempts", attempts.max(1)),
    })
}
