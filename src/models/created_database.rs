use serde::{Deserialize, Serialize};

use crate::utils::port_string;

/// Root credentials of a freshly created database.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CreatedDatabase {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub pass: String,
    #[serde(default, deserialize_with = "port_string")]
    pub port: String,
    /// Only set for MongoDB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important: Option<String>,
}
