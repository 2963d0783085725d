mod handlers;
mod wizard;

use clap::{Parser, Subcommand};
use ipaas::config;
use ipaas::models::{EnvVarRow, NewApplicationForm, NewDatabaseForm};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use handlers::apps::ContainerAction;

#[derive(Parser)]
#[command(
    name = "ipaas",
    author,
    version,
    about = "ipaas command-line client",
    long_about = r#"ipaas: deploy applications and databases on the ipaas platform from your terminal.

Every command talks to the backend configured through IPAAS_BASE_URL. Sessions are stored in the
credential file (IPAAS_CREDENTIALS_FILE) and refreshed automatically when the access token expires.

Examples:
  1) Log in with the polling id shown by the web login:
      ipaas login --polling-id 2b7c...
  2) Deploy an application interactively:
      ipaas apps new
  3) Deploy without prompts:
      ipaas apps new --repo https://github.com/x/y --branch main --lang node --port 3000 --env API_KEY=abc
  4) Watch someone's public applications:
      ipaas public mario.rossi
"#,
    after_help = "Use `ipaas <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Store a session
    #[command(
        about = "Log in",
        long_about = "Store a session either from the two tokens of a browser session, or by waiting for the OAuth login identified by --polling-id to complete."
    )]
    Login {
        #[arg(long, requires = "refresh_token", conflicts_with = "polling_id")]
        access_token: Option<String>,
        #[arg(long, requires = "access_token")]
        refresh_token: Option<String>,
        /// Id of a pending OAuth login
        #[arg(long, required_unless_present = "access_token")]
        polling_id: Option<String>,
        /// How many times to poll before giving up
        #[arg(long, default_value_t = config::DEFAULT_LOGIN_POLL_ATTEMPTS)]
        attempts: u32,
    },
    /// Forget the stored session
    Logout,
    /// Show the backend and whether a session is stored
    Status,
    /// Validate configuration (env vars / backend reachability)
    CheckConfig,
    /// Manage applications
    Apps {
        #[command(subcommand)]
        sub: AppCommands,
    },
    /// Manage databases
    Db {
        #[command(subcommand)]
        sub: DbCommands,
    },
    /// Check a repository URL and list its branches
    Validate { repo: String },
    /// Show a user's public applications, refreshing periodically
    #[command(
        about = "Show a user's public applications",
        long_about = "Poll the public listing of a user (no login needed). The table is redrawn only when the number of applications changes."
    )]
    Public {
        /// The user's tag, as in /api/{tag}/all
        tag: String,
        /// Fetch once and exit
        #[arg(long)]
        once: bool,
        /// Poll interval in milliseconds (defaults to IPAAS_PUBLIC_POLL_INTERVAL_MS)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

#[derive(Subcommand)]
enum AppCommands {
    /// List your applications
    List {
        /// Only applications whose repository has new commits
        #[arg(long)]
        updatable: bool,
    },
    /// Deploy an application from a git repository
    #[command(
        about = "Deploy an application",
        long_about = "Deploy an application from a public git repository. Without --repo and --port every field is asked interactively and the repository is validated while you answer."
    )]
    New {
        #[arg(long)]
        repo: Option<String>,
        #[arg(long)]
        branch: Option<String>,
        #[arg(long = "lang")]
        language: Option<String>,
        #[arg(long)]
        port: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Environment variable as KEY=VALUE (repeatable)
        #[arg(long = "env")]
        envs: Vec<EnvVarRow>,
    },
    /// Redeploy from the latest commit
    Update { container_id: String },
    /// Make applications public
    Publish {
        #[arg(required = true)]
        container_ids: Vec<String>,
    },
    /// Make applications private
    Unpublish {
        #[arg(required = true)]
        container_ids: Vec<String>,
    },
    /// Delete applications
    Delete {
        #[arg(required = true)]
        container_ids: Vec<String>,
    },
}

#[derive(Subcommand)]
enum DbCommands {
    /// List your databases
    List,
    /// Create a database (mysql, mariadb or mongodb)
    New {
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "type")]
        dbms: Option<String>,
    },
    /// Delete databases
    Delete {
        #[arg(required = true)]
        container_ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }
    if cli.silent {
        ipaas::api::set_silent(true);
    }
    config::load_env_file(cli.env_file.as_deref());

    match cli.command {
        Commands::Login {
            access_token,
            refresh_token,
            polling_id,
            attempts,
        } => match (access_token, refresh_token, polling_id) {
            (Some(access), Some(refresh), _) => handlers::session::login_with_tokens(access, refresh).await,
            (_, _, Some(id)) => handlers::session::login_with_polling_id(id, attempts).await,
            _ => {
                eprintln!("{}", yansi::Paint::red("Pass --polling-id, or both --access-token and --refresh-token"));
                std::process::exit(2);
            }
        },
        Commands::Logout => handlers::session::logout().await,
        Commands::Status => handlers::session::status().await,
        Commands::CheckConfig => handlers::session::check_config().await,
        Commands::Apps { sub } => match sub {
            AppCommands::List { updatable } => handlers::apps::list(updatable).await,
            AppCommands::New {
                repo,
                branch,
                language,
                port,
                description,
                envs,
            } => {
                let form = NewApplicationForm {
                    repo: repo.unwrap_or_default(),
                    branch: branch.unwrap_or_default(),
                    language: language.unwrap_or_default(),
                    port: port.unwrap_or_default(),
                    description: description.unwrap_or_default(),
                    envs,
                };
                handlers::apps::create(form).await
            }
            AppCommands::Update { container_id } => handlers::apps::update(container_id).await,
            AppCommands::Publish { container_ids } => {
                handlers::apps::container_action(ContainerAction::Publish, container_ids).await
            }
            AppCommands::Unpublish { container_ids } => {
                handlers::apps::container_action(ContainerAction::Revoke, container_ids).await
            }
            AppCommands::Delete { container_ids } => {
                handlers::apps::container_action(ContainerAction::Delete, container_ids).await
            }
        },
        Commands::Db { sub } => match sub {
            DbCommands::List => handlers::databases::list().await,
            DbCommands::New { name, dbms } => {
                let form = NewDatabaseForm {
                    name: name.unwrap_or_default(),
                    dbms: dbms.unwrap_or_default(),
                };
                handlers::databases::create(form).await
            }
            DbCommands::Delete { container_ids } => {
                handlers::apps::container_action(ContainerAction::Delete, container_ids).await
            }
        },
        Commands::Validate { repo } => handlers::public::validate(repo).await,
        Commands::Public {
            tag,
            once,
            interval_ms,
        } => handlers::public::watch(tag, once, interval_ms).await,
    }
}
