use serde::{Deserialize, Serialize};

/// What the backend knows about a repository once its URL validates.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RepoMetadata {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_branch: String,
    #[serde(default)]
    pub branches: Vec<String>,
}
