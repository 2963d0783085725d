use std::process;
use std::sync::Arc;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use ipaas::api::{ApiClient, ApiError, Reply};
use ipaas::config;
use ipaas::services::CredentialStore;
use serde_json::Value;
use yansi::Paint;

/// Builds the client from the environment. Exits when the credential file
/// cannot be read.
pub async fn build_client() -> Arc<ApiClient> {
    let path = config::get_credentials_path();
    let store = match CredentialStore::load(&path).await {
        Ok(store) => store,
        Err(e) => fail(&format!("Failed to read {}", path.display()), &e),
    };
    match ApiClient::new(&config::get_base_url(), store) {
        Ok(client) => Arc::new(client),
        Err(e) => fail("Failed to create HTTP client", &e),
    }
}

/// Like [`build_client`] but refuses to run without a stored session.
pub async fn build_session_client() -> Arc<ApiClient> {
    let client = build_client().await;
    if !client.credentials().is_logged_in() {
        eprintln!(
            "{} {}",
            Paint::red("Not logged in."),
            Paint::yellow("Run `ipaas login` first.")
        );
        process::exit(1);
    }
    client
}

pub fn fail(context: &str, err: &ApiError) -> ! {
    tracing::error!(%err, context);
    eprintln!("{}: {}", Paint::red(context), err);
    if err.is_session_expired() || matches!(err, ApiError::RefreshFailed(_)) {
        eprintln!("{}", Paint::yellow("Your session is over, log in again with `ipaas login`."));
    }
    process::exit(1);
}

/// Exits on an error that does not come from the backend.
pub fn abort(context: &str, err: &dyn std::fmt::Display) -> ! {
    tracing::error!(%err, context);
    eprintln!("{}: {}", Paint::red(context), err);
    process::exit(1);
}

pub fn unwrap_or_fail<T>(context: &str, result: Result<T, ApiError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => fail(context, &e),
    }
}

/// Prints the backend's message for a reply without payload of interest.
pub fn print_reply(fallback: &str, reply: &Reply<Value>) {
    let text = reply.message.as_deref().unwrap_or(fallback);
    println!("{}", Paint::green(text));
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
