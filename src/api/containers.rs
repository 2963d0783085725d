use reqwest::Method;
use serde_json::Value;

use super::client::ApiClient;
use super::envelope::Reply;
use super::error::ApiError;
use crate::utils::path_segment;

/// Removes an application or database container.
pub async fn delete_container(client: &ApiClient, container_id: &str) -> Result<Reply<Value>, ApiError> {
    let endpoint = format!("/api/container/delete/{}", path_segment(container_id));
    client.request(Method::DELETE, &endpoint, None).await
}

/// Lists the application on its owner's public page.
pub async fn publish_container(client: &ApiClient, container_id: &str) -> Result<Reply<Value>, ApiError> {
    let endpoint = format!("/api/container/publish/{}", path_segment(container_id));
    client.request(Method::GET, &endpoint, None).await
}

/// Hides the application from its owner's public page.
pub async fn revoke_container(client: &ApiClient, container_id: &str) -> Result<Reply<Value>, ApiError> {
    let endpoint = format!("/api/container/revoke/{}", path_segment(container_id));
    client.request(Method::GET, &endpoint, None).await
}
