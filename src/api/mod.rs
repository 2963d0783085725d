pub mod client;
pub mod envelope;
pub mod error;
pub mod tokens;

pub mod applications;
pub mod auth;
pub mod containers;
pub mod databases;
pub mod repository;

pub use client::{set_silent, ApiClient, RawResponse};
pub use envelope::{Envelope, ErrorFlag, Reply, SESSION_EXPIRED_CODE};
pub use error::ApiError;
pub use tokens::{refresh_tokens, REFRESH_ENDPOINT};

pub use applications::{
    create_application, load_applications, load_public_applications, update_application, AppKind,
};
pub use auth::{check_login, LoginPoll};
pub use containers::{delete_container, publish_container, revoke_container};
pub use databases::{create_database, load_databases};
pub use repository::validate_repo;
