use reqwest::Method;
use serde_json::Value;

use super::client::ApiClient;
use super::envelope::Reply;
use super::error::ApiError;
use crate::models::{ApplicationSummary, CreatedApplication, NewApplicationRequest};
use crate::utils::path_segment;

/// Which slice of the user's containers the private listing returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppKind {
    Web,
    Database,
    All,
    /// Web applications whose repository moved past the deployed commit.
    Updatable,
}

impl AppKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppKind::Web => "web",
            AppKind::Database => "database",
            AppKind::All => "all",
            AppKind::Updatable => "updatable",
        }
    }
}

/// `None` when the backend answers with `data: null` (no applications).
pub async fn load_applications(
    client: &ApiClient,
    kind: AppKind,
) -> Result<Option<Vec<ApplicationSummary>>, ApiError> {
    let endpoint = format!("/api/user/getApps/{}", kind.as_str());
    Ok(client.request(Method::GET, &endpoint, None).await?.data)
}

/// Public applications of another user. Needs no session.
pub async fn load_public_applications(
    client: &ApiClient,
    owner_tag: &str,
) -> Result<Option<Vec<ApplicationSummary>>, ApiError> {
    let endpoint = format!("/api/{}/all", path_segment(owner_tag));
    Ok(client.request_once(Method::GET, &endpoint, None).await?.data)
}

pub async fn create_application(
    client: &ApiClient,
    request: &NewApplicationRequest,
) -> Result<CreatedApplication, ApiError> {
    let body = serde_json::to_value(request)?;
    let reply = client.request::<CreatedApplication>(Method::POST, "/api/app/new", Some(body)).await?;
    reply.data.ok_or_else(|| ApiError::Rejected {
        code: None,
        message: "The backend did not report where the application is reachable".into(),
    })
}

/// Rebuilds an application from the latest commit of its branch.
pub async fn update_application(client: &ApiClient, container_id: &str) -> Result<Reply<Value>, ApiError> {
    let endpoint = format!("/api/app/update/{}", path_segment(container_id));
    client.request(Method::POST, &endpoint, None).await
}
