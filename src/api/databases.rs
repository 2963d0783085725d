use reqwest::Method;

use super::client::ApiClient;
use super::error::ApiError;
use crate::models::{CreatedDatabase, DatabaseSummary, NewDatabaseRequest};

pub async fn load_databases(client: &ApiClient) -> Result<Option<Vec<DatabaseSummary>>, ApiError> {
    Ok(client
        .request(Method::GET, "/api/user/getApps/database", None)
        .await?
        .data)
}

pub async fn create_database(
    client: &ApiClient,
    request: &NewDatabaseRequest,
) -> Result<CreatedDatabase, ApiError> {
    let body = serde_json::to_value(request)?;
    let reply = client.request::<CreatedDatabase>(Method::POST, "/api/db/new", Some(body)).await?;
    reply.data.ok_or_else(|| ApiError::Rejected {
        code: None,
        message: "The backend did not return the database credentials".into(),
    })
}
