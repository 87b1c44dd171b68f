//! `lchaty-cli`: drive the lchaty session endpoints from a terminal.
//!
//! Each invocation is one process with one cookie jar. `login` prints the
//! resulting session cookie so later invocations can pass it back through
//! `--session-cookie` / `LCHATY_SESSION_COOKIE`.

mod transport;

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde_json::{Value, json};
use session::{ApiConfig, AuthError, AuthStore, GuardDecision, HttpClient, evaluate};

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Auth(#[from] AuthError),
    #[error("not signed in")]
    NotSignedIn,
    #[error("access check failed: {0}")]
    Denied(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "lchaty-cli", about = "lchaty session CLI")]
struct Cli {
    #[arg(long, env = "LCHATY_API_BASE_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    /// Cookie header from a previous `login`, e.g. `session=abc`.
    #[arg(long, env = "LCHATY_SESSION_COOKIE")]
    session_cookie: Option<String>,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = session::config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the signed-in user for the current session cookie.
    Me,
    /// Sign in and print the user and the session cookie.
    Login(Credentials),
    /// End the current session.
    Logout,
    /// Create an account, then sign in.
    Signup {
        #[command(flatten)]
        credentials: Credentials,
        #[arg(long)]
        email: Option<String>,
    },
    /// Sign in, re-probe identity, evaluate a route guard, sign out.
    Check {
        #[command(flatten)]
        credentials: Credentials,
        /// Role the guarded route requires; repeatable.
        #[arg(long = "role")]
        roles: Vec<String>,
        #[arg(long, default_value = "/")]
        path: String,
    },
}

#[derive(Args, Debug)]
struct Credentials {
    #[arg(long, env = "LCHATY_USERNAME")]
    username: String,
    #[arg(long, env = "LCHATY_PASSWORD")]
    password: String,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let transport = ReqwestTransport::new(&cli.base_url, cli.session_cookie.as_deref())?;
    let config = ApiConfig::new(&cli.base_url).with_timeout(Duration::from_secs(cli.timeout_secs));
    let store = AuthStore::new(HttpClient::new(transport, config));

    match cli.command {
        Command::Me => run_me(&store).await,
        Command::Login(credentials) => run_login(&store, credentials).await,
        Command::Logout => run_logout(&store).await,
        Command::Signup { credentials, email } => run_signup(&store, credentials, email).await,
        Command::Check {
            credentials,
            roles,
            path,
        } => run_check(&store, credentials, roles, &path).await,
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    // Also installs the `log` bridge so `session` records show up here.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

type Store = AuthStore<ReqwestTransport>;

async fn run_me(store: &Store) -> Result<(), CliError> {
    store.bootstrap().await?;
    let user = store.state().user.ok_or(CliError::NotSignedIn)?;
    print_json(&serde_json::to_value(user)?)
}

async fn run_login(store: &Store, credentials: Credentials) -> Result<(), CliError> {
    store.login(&credentials.username, &credentials.password).await?;
    print_session(store)
}

async fn run_logout(store: &Store) -> Result<(), CliError> {
    store.logout().await;
    println!("ok");
    Ok(())
}

async fn run_signup(store: &Store, credentials: Credentials, email: Option<String>) -> Result<(), CliError> {
    store
        .signup(&credentials.username, &credentials.password, email.as_deref())
        .await?;
    print_session(store)
}

async fn run_check(store: &Store, credentials: Credentials, roles: Vec<String>, path: &str) -> Result<(), CliError> {
    store.login(&credentials.username, &credentials.password).await?;
    tracing::info!(username = %credentials.username, "signed in");

    store.refresh().await?;
    let decision = evaluate(&store.state(), roles.as_slice(), path);
    tracing::info!(?decision, path, "guard evaluated");

    store.logout().await;
    if store.state().is_authenticated() {
        return Err(CliError::Denied("still signed in after logout".to_owned()));
    }

    print_json(&json!({ "path": path, "decision": describe(&decision) }))?;
    match decision {
        GuardDecision::Render => Ok(()),
        other => Err(CliError::Denied(describe(&other))),
    }
}

fn print_session(store: &Store) -> Result<(), CliError> {
    let user = store.state().user.ok_or(CliError::NotSignedIn)?;
    print_json(&json!({
        "user": serde_json::to_value(user)?,
        "cookie": store.client().transport().session_cookie(),
    }))
}

fn describe(decision: &GuardDecision) -> String {
    match decision {
        GuardDecision::Loading => "loading".to_owned(),
        GuardDecision::RedirectToLogin { location } => format!("redirect {location}"),
        GuardDecision::NotAuthorized => "not authorized".to_owned(),
        GuardDecision::Render => "render".to_owned(),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
