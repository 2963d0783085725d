use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DatabaseSummary {
    #[serde(rename = "containerID")]
    pub container_id: String,
    #[serde(default)]
    pub name: String,
}
