use reqwest::Method;
use serde_json::json;

use super::client::ApiClient;
use super::error::ApiError;
use crate::models::RepoMetadata;

/// Asks the backend whether `repo` is a public repository it can build, and
/// for its branches. A rejection is reported as a validation error.
pub async fn validate_repo(client: &ApiClient, repo: &str) -> Result<RepoMetadata, ApiError> {
    let body = json!({ "repo": repo });
    match client.request::<RepoMetadata>(Method::POST, "/api/user/validate", Some(body)).await {
        Ok(reply) => Ok(reply.data.unwrap_or_default()),
        Err(ApiError::Rejected { message, .. }) => Err(ApiError::Validation(message)),
        Err(e) => Err(e),
    }
}
