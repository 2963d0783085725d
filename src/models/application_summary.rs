use serde::{Deserialize, Serialize};

use crate::utils::port_string;

/// One deployed application as returned by the listing endpoints.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApplicationSummary {
    #[serde(rename = "containerID")]
    pub container_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// The backend stores this as a string but older builds send a number.
    #[serde(rename = "externalPort", default, deserialize_with = "port_string")]
    pub external_port: String,
    #[serde(rename = "isPublic", default)]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(rename = "githubRepo", default, skip_serializing_if = "Option::is_none")]
    pub github_repo: Option<String>,
    #[serde(rename = "githubBranch", default, skip_serializing_if = "Option::is_none")]
    pub github_branch: Option<String>,
    #[serde(rename = "isUpdatable", default)]
    pub is_updatable: bool,
}
