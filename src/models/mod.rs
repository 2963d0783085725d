pub mod application_summary;
pub mod database_summary;
pub mod env_var_row;
pub mod repo_metadata;
pub mod new_application_form;
pub mod new_database_form;
pub mod created_application;
pub mod created_database;
pub mod credential_pair;

// Re-export commonly used types
pub use application_summary::ApplicationSummary;
pub use database_summary::DatabaseSummary;
pub use env_var_row::EnvVarRow;
pub use repo_metadata::RepoMetadata;
pub use new_application_form::{NewApplicationForm, NewApplicationRequest, DEFAULT_LANGUAGE, MISSING_FIELDS_MESSAGE};
pub use new_database_form::{DatabaseType, NewDatabaseForm, NewDatabaseRequest, INVALID_DB_TYPE_MESSAGE};
pub use created_application::CreatedApplication;
pub use created_database::CreatedDatabase;
pub use credential_pair::{CredentialPair, ACCESS_COOKIE, REFRESH_COOKIE};
