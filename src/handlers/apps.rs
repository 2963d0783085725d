use std::sync::Arc;

use futures_util::future::join_all;
use ipaas::api::{self, ApiClient, AppKind};
use ipaas::config;
use ipaas::models::NewApplicationForm;
use ipaas::render::application_listing;
use yansi::Paint;

use super::helpers::{abort, build_session_client, print_reply, spinner, unwrap_or_fail};
use crate::wizard;

pub async fn list(updatable: bool) {
    let client = build_session_client().await;
    let kind = if updatable { AppKind::Updatable } else { AppKind::Web };
    let apps = unwrap_or_fail("Failed to load applications", api::load_applications(&client, kind).await);
    let listing = application_listing(apps.as_deref(), &config::get_app_host());
    println!("\n{}\n", listing);
}

/// Deploys from flags, or asks for every field when the repository or the
/// port is missing.
pub async fn create(form: NewApplicationForm) {
    let client = build_session_client().await;
    let form = if form.repo.trim().is_empty() || form.port.trim().is_empty() {
        match wizard::application_form(Arc::clone(&client), form).await {
            Ok(form) => form,
            Err(e) => abort("Could not read the form", &e),
        }
    } else {
        with_default_branch(&client, form).await
    };

    let request = unwrap_or_fail("Invalid application", form.into_request());
    let pb = spinner("Building and starting the application");
    let result = api::create_application(&client, &request).await;
    pb.finish_and_clear();
    let created = unwrap_or_fail("Failed to create the application", result);

    let url = ipaas::utils::app_url(&config::get_app_host(), &created.external_port);
    println!(
        "{} {}",
        Paint::green("Application created successfully, it is reachable at"),
        Paint::cyan(&created.external_port).bold()
    );
    println!("{}", Paint::new(url).underline());
}

/// Fills an omitted `--branch` with the repository's default branch.
async fn with_default_branch(client: &ApiClient, mut form: NewApplicationForm) -> NewApplicationForm {
    if form.branch.trim().is_empty() {
        let meta = unwrap_or_fail("Invalid repository", api::validate_repo(client, form.repo.trim()).await);
        tracing::debug!(branch = %meta.default_branch, "Using the repository's default branch");
        form.branch = meta.default_branch;
    }
    form
}

pub async fn update(container_id: String) {
    let client = build_session_client().await;
    let pb = spinner("Rebuilding the application");
    let result = api::update_application(&client, &container_id).await;
    pb.finish_and_clear();
    let reply = unwrap_or_fail("Failed to update the application", result);
    print_reply("Application updated", &reply);
}

#[derive(Clone, Copy)]
pub enum ContainerAction {
    Delete,
    Publish,
    Revoke,
}

impl ContainerAction {
    fn done(&self) -> &'static str {
        match self {
            ContainerAction::Delete => "deleted",
            ContainerAction::Publish => "is now public",
            ContainerAction::Revoke => "is now private",
        }
    }
}

/// Runs the action on every id concurrently and reports each result.
pub async fn container_action(action: ContainerAction, ids: Vec<String>) {
    let client = build_session_client().await;
    let calls = ids.iter().map(|id| run_action(&client, action, id));
    let results = join_all(calls).await;

    let mut failed = false;
    for (id, result) in ids.iter().zip(results) {
        match result {
            Ok(_) => println!("{} {}", Paint::cyan(id), Paint::green(action.done())),
            Err(e) => {
                failed = true;
                tracing::error!(%e, id = %id, "Container action failed");
                eprintln!("{} {}", Paint::red(id), Paint::red(&e.to_string()));
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

async fn run_action(
    client: &ApiClient,
    action: ContainerAction,
    id: &str,
) -> Result<api::Reply<serde_json::Value>, api::ApiError> {
    match action {
        ContainerAction::Delete => api::delete_container(client, id).await,
        ContainerAction::Publish => api::publish_container(client, id).await,
        ContainerAction::Revoke => api::revoke_container(client, id).await,
    }
}
