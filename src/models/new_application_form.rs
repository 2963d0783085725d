use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::models::EnvVarRow;

/// Message shown when a required field of the application form is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all the fields";
/// Language used when none was chosen.
pub const DEFAULT_LANGUAGE: &str = "go";

/// Everything the user filled in to deploy an application from a repository.
#[derive(Clone, Debug, Default)]
pub struct NewApplicationForm {
    pub repo: String,
    pub branch: String,
    pub language: String,
    pub port: String,
    pub description: String,
    pub envs: Vec<EnvVarRow>,
}

/// Body of `POST /api/app/new`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewApplicationRequest {
    #[serde(rename = "github-repo")]
    pub github_repo: String,
    #[serde(rename = "github-branch")]
    pub github_branch: String,
    pub language: String,
    pub port: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub envs: Vec<EnvVarRow>,
}

impl NewApplicationForm {
    /// Checks the required fields and drops incomplete environment rows.
    /// An empty language becomes [`DEFAULT_LANGUAGE`].
    pub fn into_request(self) -> Result<NewApplicationRequest, ApiError> {
        let repo = self.repo.trim().to_string();
        let port = self.port.trim().to_string();
        if repo.is_empty() || port.is_empty() {
            return Err(ApiError::Validation(MISSING_FIELDS_MESSAGE.into()));
        }
        Ok(NewApplicationRequest {
            github_repo: repo,
            github_branch: self.branch.trim().to_string(),
            language: match self.language.trim() {
                "" => DEFAULT_LANGUAGE.to_string(),
                lang => lang.to_string(),
            },
            port,
            description: self.description,
            envs: self.envs.into_iter().filter(EnvVarRow::is_complete).collect(),
        })
    }
}
