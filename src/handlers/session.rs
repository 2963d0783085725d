use std::process;

use ipaas::api::{ApiError, AppKind};
use ipaas::config;
use ipaas::models::CredentialPair;
use ipaas::services::wait_for_login;
use yansi::Paint;

use super::helpers::{build_client, fail, spinner};

pub async fn login_with_tokens(access_token: String, refresh_token: String) {
    let client = build_client().await;
    let pair = CredentialPair::new(access_token.trim(), refresh_token.trim());
    if pair.access_token.is_empty() || pair.refresh_token.is_empty() {
        eprintln!("{}", Paint::red("Both tokens are required"));
        process::exit(1);
    }
    if let Err(e) = client.credentials().replace(pair).await {
        fail("Failed to store credentials", &e);
    }
    print_stored(client.credentials().path());
}

pub async fn login_with_polling_id(polling_id: String, attempts: u32) {
    let client = build_client().await;
    println!(
        "{} {}",
        Paint::cyan("Finish the login in your browser, then wait here."),
        Paint::new(format!("{}/api/oauth/check/{}", client.base_url(), polling_id)).dim()
    );
    let pb = spinner("Waiting for the login to complete");
    let result = wait_for_login(&client, &polling_id, config::get_login_poll_interval(), attempts).await;
    pb.finish_and_clear();
    match result {
        Ok(_) => print_stored(client.credentials().path()),
        Err(e) => fail("Login failed", &e),
    }
}

fn print_stored(path: Option<&std::path::Path>) {
    let where_ = path.map(|p| p.display().to_string()).unwrap_or_default();
    println!("{} {}", Paint::green("Logged in, credentials saved to"), Paint::cyan(&where_));
}

pub async fn logout() {
    let client = build_client().await;
    match client.credentials().clear().await {
        Ok(true) => println!("{}", Paint::green("Logged out")),
        Ok(false) => println!("{}", Paint::yellow("No session was stored")),
        Err(e) => fail("Failed to remove credentials", &e),
    }
}

pub async fn status() {
    let client = build_client().await;
    let store = client.credentials();
    println!("{:<18}{}", "Backend:", Paint::cyan(client.base_url()));
    println!(
        "{:<18}{}",
        "Credential file:",
        store.path().map(|p| p.display().to_string()).unwrap_or_default()
    );
    match store.current() {
        Some(pair) => println!(
            "{:<18}{} (stored {})",
            "Session:",
            Paint::green("logged in"),
            pair.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        None => println!("{:<18}{}", "Session:", Paint::yellow("not logged in")),
    }
}

/// Checks the configuration and that the backend answers with envelopes.
pub async fn check_config() {
    let client = build_client().await;
    println!("{:<18}{}", "IPAAS_BASE_URL:", client.base_url());
    println!("{:<18}{}", "IPAAS_APP_HOST:", config::get_app_host());
    println!("{:<18}{:?}", "Debounce:", config::get_validate_debounce());
    println!("{:<18}{:?}", "Poll interval:", config::get_public_poll_interval());

    // any envelope, even an error one, proves the backend is reachable
    let endpoint = format!("/api/user/getApps/{}", AppKind::All.as_str());
    match client.request_once::<serde_json::Value>(reqwest::Method::GET, &endpoint, None).await {
        Ok(_) | Err(ApiError::SessionExpired(_)) | Err(ApiError::Rejected { .. }) => {
            println!("{}", Paint::green("Configuration looks valid (backend reachable)"));
        }
        Err(e) => fail("Configuration appears invalid", &e),
    }
}
