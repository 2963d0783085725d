use serde::{Deserialize, Serialize};

use crate::utils::port_string;

/// Success payload of `/api/app/new`. The backend answers with `IP:port`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CreatedApplication {
    #[serde(default, deserialize_with = "port_string")]
    pub external_port: String,
}
