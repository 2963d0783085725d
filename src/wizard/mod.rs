//! Interactive forms for `apps new` and `db new`.

mod prompt;

use std::sync::Arc;

use ipaas::api::ApiClient;
use ipaas::config;
use ipaas::models::{
    DatabaseType, EnvVarRow, NewApplicationForm, NewDatabaseForm, RepoMetadata, DEFAULT_LANGUAGE,
    INVALID_DB_TYPE_MESSAGE,
};
use ipaas::services::{FieldState, RepoValidator, Submission};
use yansi::Paint;

pub use prompt::{Prompt, WizardError};

/// Asks for every application field. Values already in `seed` become the
/// defaults.
pub async fn application_form(
    client: Arc<ApiClient>,
    seed: NewApplicationForm,
) -> Result<NewApplicationForm, WizardError> {
    let mut prompt = Prompt::stdin();
    let validator = RepoValidator::for_client(client, config::get_validate_debounce());

    let (repo, meta) = ask_repository(&mut prompt, &validator, &seed.repo).await?;
    if !meta.description.is_empty() {
        println!("{}", Paint::new(&meta.description).dim());
    }

    let default_branch = if seed.branch.is_empty() { meta.default_branch.clone() } else { seed.branch.clone() };
    if !meta.branches.is_empty() {
        println!("{} {}", Paint::new("Branches:").bold(), meta.branches.join(", "));
    }
    let branch = loop {
        let answer = prompt.ask("Branch", Some(&default_branch)).await?;
        if meta.branches.is_empty() || meta.branches.contains(&answer) {
            break answer;
        }
        println!("{}", Paint::red("Pick one of the branches listed above"));
    };

    let language_default = if seed.language.is_empty() { DEFAULT_LANGUAGE } else { seed.language.as_str() };
    let language = prompt.ask("Language", Some(language_default)).await?;

    let port = loop {
        let answer = prompt.ask("Port the application listens on", non_empty(&seed.port)).await?;
        if answer.parse::<u16>().map(|p| p > 0).unwrap_or(false) {
            break answer;
        }
        println!("{}", Paint::red("Enter a port between 1 and 65535"));
    };

    let description_default = if seed.description.is_empty() { meta.description.as_str() } else { seed.description.as_str() };
    let description = prompt.ask("Description", Some(description_default)).await?;

    let mut envs = seed.envs;
    loop {
        let answer = prompt.ask("Environment variable KEY=VALUE (empty to finish)", None).await?;
        if answer.is_empty() {
            break;
        }
        let row: EnvVarRow = answer.parse().unwrap_or_default();
        if row.is_complete() {
            envs.push(row);
        } else {
            println!("{}", Paint::yellow("Both a key and a value are needed, row ignored"));
        }
    }

    Ok(NewApplicationForm {
        repo,
        branch,
        language,
        port,
        description,
        envs,
    })
}

/// Reads repository URLs until the backend accepts one.
async fn ask_repository(
    prompt: &mut Prompt,
    validator: &RepoValidator,
    seed: &str,
) -> Result<(String, RepoMetadata), WizardError> {
    loop {
        let repo = prompt.ask("Repository URL", non_empty(seed)).await?;
        if validator.submit(&repo) == Submission::Ignored && validator.last_sent().as_deref() != Some(repo.as_str()) {
            println!("{}", Paint::red("The repository URL is required"));
            continue;
        }
        match validator.settled().await {
            FieldState::Valid(meta) => return Ok((repo, meta)),
            FieldState::Invalid(message) => println!("{}", Paint::red(&message)),
            other => tracing::debug!(?other, "Validator settled without a verdict"),
        }
    }
}

pub async fn database_form(seed: NewDatabaseForm) -> Result<NewDatabaseForm, WizardError> {
    let mut prompt = Prompt::stdin();
    let name = loop {
        let answer = prompt.ask("Database name", non_empty(&seed.name)).await?;
        if !answer.is_empty() {
            break answer;
        }
        println!("{}", Paint::red("Please choose a name for the database"));
    };

    let choices = DatabaseType::all().iter().map(DatabaseType::as_str).collect::<Vec<_>>().join(", ");
    let default_type = non_empty(&seed.dbms).unwrap_or(DatabaseType::Mysql.as_str());
    let dbms = loop {
        let answer = prompt.ask(&format!("Database type ({})", choices), Some(default_type)).await?;
        if answer.parse::<DatabaseType>().is_ok() {
            break answer;
        }
        println!("{}", Paint::red(INVALID_DB_TYPE_MESSAGE));
    };

    Ok(NewDatabaseForm { name, dbms })
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}
