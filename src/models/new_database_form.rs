use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Shown when the engine is not one the backend provisions.
pub const INVALID_DB_TYPE_MESSAGE: &str = "Invalid db type, must be mysql, mariadb or mongodb";

/// Database engines the backend can provision.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseType {
    Mysql,
    Mariadb,
    Mongodb,
}

impl FromStr for DatabaseType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mysql" => Ok(DatabaseType::Mysql),
            "mariadb" => Ok(DatabaseType::Mariadb),
            "mongodb" => Ok(DatabaseType::Mongodb),
            _ => Err(ApiError::Validation(INVALID_DB_TYPE_MESSAGE.into())),
        }
    }
}

impl DatabaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::Mysql => "mysql",
            DatabaseType::Mariadb => "mariadb",
            DatabaseType::Mongodb => "mongodb",
        }
    }

    pub fn all() -> &'static [DatabaseType] {
        &[DatabaseType::Mysql, DatabaseType::Mariadb, DatabaseType::Mongodb]
    }
}

#[derive(Clone, Debug, Default)]
pub struct NewDatabaseForm {
    pub name: String,
    pub dbms: String,
}

/// Body of `POST /api/db/new`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDatabaseRequest {
    pub database_name: String,
    pub database_type: DatabaseType,
}

impl NewDatabaseForm {
    pub fn into_request(self) -> Result<NewDatabaseRequest, ApiError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ApiError::Validation("Please choose a name for the database".into()));
        }
        let database_type = self.dbms.parse::<DatabaseType>()?;
        Ok(NewDatabaseRequest {
            database_name: name,
            database_type,
        })
    }
}
