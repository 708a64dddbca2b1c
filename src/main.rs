//! portal-access - inspect route access decisions from the command line
//!
//! Loads a portal configuration and prints verdicts, menus and breadcrumb
//! trails as pretty JSON.

#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portal_access::utils::init_logging;
use portal_access::{AccessEngine, Config, Identity, Role, Tier, build_info};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "portal-access",
    version,
    about = "Route access control and navigation derivation"
)]
struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        env = "PORTAL_ACCESS_CONFIG",
        default_value = "config/portal.yaml"
    )]
    config: PathBuf,

    /// Role of the identity (defaults to rbac.default_role)
    #[arg(long, global = true)]
    role: Option<Role>,

    /// Tier of the identity (defaults to rbac.default_tier)
    #[arg(long, global = true)]
    tier: Option<Tier>,

    /// User id attached to the identity
    #[arg(long, global = true)]
    subject: Option<String>,

    /// Evaluate without an identity
    #[arg(long, global = true, conflicts_with_all = ["role", "tier", "subject"])]
    anonymous: bool,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration and summarize it
    Check,
    /// Authorize a path for the identity
    Authorize { path: String },
    /// Print the menu visible to the identity
    Navigation,
    /// Print the breadcrumb trail for a path
    Breadcrumbs {
        path: String,
        /// Override breadcrumbs.max_items
        #[arg(long)]
        max_items: Option<usize>,
    },
    /// Show which route a path resolves to
    Resolve { path: String },
    /// Print build information
    Info,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    if let Command::Info = cli.command {
        return print_json(&build_info());
    }

    let mut config = Config::from_file(&cli.config)
        .await
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    let mut logging = config.logging().clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    init_logging(&logging)?;

    if let Command::Breadcrumbs {
        max_items: Some(max_items),
        ..
    } = &cli.command
    {
        config.portal.breadcrumbs.max_items = Some(*max_items);
    }

    let engine = AccessEngine::from_config(&config).context("Failed to build access engine")?;
    let identity = cli_identity(&cli, &engine);
    debug!(?identity, "Evaluating");

    match &cli.command {
        Command::Check => print_json(&json!({
            "routes": engine.tree().len(),
            "treeVersion": format!("{:016x}", engine.tree().version()),
            "roles": engine.rbac().list_roles(),
            "unreachablePermissions": engine.unreachable_permissions(),
        })),
        Command::Authorize { path } => print_json(&engine.authorize(path, identity.as_ref())),
        Command::Navigation => print_json(&engine.navigation(identity.as_ref())),
        Command::Breadcrumbs { path, .. } => print_json(&engine.breadcrumbs(path)),
        Command::Resolve { path } => match engine.resolve(path) {
            Some(found) => print_json(&json!({
                "pattern": found.pattern(),
                "label": found.node.label,
                "params": found.params,
                "ancestors": found
                    .ancestors
                    .iter()
                    .map(|node| node.label.as_str())
                    .collect::<Vec<_>>(),
            })),
            None => anyhow::bail!("No route matches {}", path),
        },
        Command::Info => print_json(&build_info()),
    }
}

fn cli_identity(cli: &Cli, engine: &AccessEngine) -> Option<Identity> {
    if cli.anonymous {
        return None;
    }
    let defaults = engine.rbac().config();
    Some(engine.identity(
        cli.subject.as_deref(),
        cli.role.unwrap_or(defaults.default_role),
        cli.tier.unwrap_or(defaults.default_tier),
    ))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{}", rendered);
    Ok(())
}
