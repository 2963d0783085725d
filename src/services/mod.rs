pub mod credential_store;
pub mod login_service;
pub mod public_listing_service;
pub mod repo_validator;
pub mod session_service;

// Re-export commonly used types
pub use credential_store::CredentialStore;
pub use login_service::wait_for_login;
pub use public_listing_service::PublicListingPoller;
pub use repo_validator::{FieldState, RepoValidator, Submission};
pub use session_service::{RefreshState, SessionGuard};
