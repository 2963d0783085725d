use std::time::Duration;

use ipaas::api;
use ipaas::config;
use ipaas::render::PublicUpdate;
use ipaas::services::PublicListingPoller;
use yansi::Paint;

use super::helpers::{build_client, build_session_client, unwrap_or_fail};

/// Shows a user's public applications, redrawing when the count changes.
pub async fn watch(owner_tag: String, once: bool, interval_ms: Option<u64>) {
    let client = build_client().await;
    let interval = interval_ms
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
        .unwrap_or_else(config::get_public_poll_interval);
    let mut poller = PublicListingPoller::new(client, owner_tag, interval, &config::get_app_host());

    if once {
        match unwrap_or_fail("Failed to load public applications", poller.poll_once().await) {
            PublicUpdate::Render(listing) => println!("\n{}\n", listing),
            PublicUpdate::Unchanged => {}
        }
        return;
    }

    poller
        .run(None, |result| match result {
            Ok(PublicUpdate::Render(listing)) => println!("\n{}\n", listing),
            Ok(PublicUpdate::Unchanged) => {}
            Err(e) => eprintln!("{}: {}", Paint::red("Failed to load public applications"), e),
        })
        .await;
}

/// One-shot repository check, the same call the wizard makes while typing.
pub async fn validate(repo: String) {
    let client = build_session_client().await;
    let meta = unwrap_or_fail("Invalid repository", api::validate_repo(&client, &repo).await);
    println!("{} {}", Paint::green("Valid repository:"), Paint::cyan(&repo));
    if !meta.description.is_empty() {
        println!("{:<16}{}", "Description:", meta.description);
    }
    println!("{:<16}{}", "Default branch:", meta.default_branch);
    println!("{:<16}{}", "Branches:", meta.branches.join(", "));
}
