use crate::config::RouterConfig;
use crate::events::{ControllerEvents, CreatingEvent};
use crate::path::tokenize;
use crate::router::{ComponentTarget, Flavor, Router, DEFAULT_VERB, INDEX_NAME};
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};

/// Command-line interface for segrouter
#[derive(Parser, Debug)]
#[command(name = "segrouter")]
#[command(version, about = "Event-driven request-path dispatcher", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a path into the segments the router sees
    Tokenize {
        /// Raw request path, query string allowed
        path: String,
    },
    /// Show which target the first path segment resolves to
    Resolve {
        /// Router configuration (YAML)
        #[arg(short, long, env = "SEGR_CONFIG")]
        config: Option<PathBuf>,

        /// Flavor of the empty router used when no config is given
        #[arg(long, default_value = "mvc")]
        flavor: Flavor,

        /// Raw request path
        path: String,
    },
    /// Dispatch a path and print the action result
    Dispatch {
        /// Router configuration (YAML)
        #[arg(short, long, env = "SEGR_CONFIG")]
        config: Option<PathBuf>,

        /// Flavor of the empty router used when no config is given
        #[arg(long, default_value = "mvc")]
        flavor: Flavor,

        /// Request verb; selects the action on rest routers
        #[arg(long, default_value = DEFAULT_VERB)]
        verb: String,

        /// Raw request path
        path: String,
    },
}

fn load_router(config: Option<&Path>, flavor: Flavor) -> anyhow::Result<Router> {
    match config {
        Some(path) => {
            let config = RouterConfig::from_path(path)?;
            config
                .build()
                .with_context(|| format!("Failed to build router from {}", path.display()))
        }
        None => Ok(Router::new(flavor)),
    }
}

/// Run one command and return what it would print.
///
/// # Errors
///
/// Configuration failures and dispatch failures are returned with context.
pub fn execute(command: &Commands) -> anyhow::Result<String> {
    match command {
        Commands::Tokenize { path } => {
            let segments: Vec<String> = tokenize(path).map(|s| s.into_vec()).unwrap_or_default();
            Ok(serde_json::to_string_pretty(&segments)?)
        }
        Commands::Resolve {
            config,
            flavor,
            path,
        } => {
            let router = load_router(config.as_deref(), *flavor)?;
            let segments = tokenize(path).unwrap_or_default();
            let first = segments.first().map_or(INDEX_NAME, String::as_str);

            let report = match router.components().get(first) {
                Some(ComponentTarget::Named(descriptor)) => {
                    json!({ "kind": "component", "segment": first, "target": descriptor })
                }
                Some(ComponentTarget::Instance(_)) => {
                    json!({ "kind": "component", "segment": first, "target": null })
                }
                None => {
                    let mut creating = CreatingEvent::new(first);
                    router
                        .emit(ControllerEvents::CREATING, &mut creating)
                        .with_context(|| format!("Failed to resolve '{first}'"))?;
                    json!({ "kind": "controller", "segment": first, "target": creating.class() })
                }
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
        Commands::Dispatch {
            config,
            flavor,
            verb,
            path,
        } => {
            let router = load_router(config.as_deref(), *flavor)?;
            let result = router
                .dispatch_with_verb(path.as_str(), verb)
                .with_context(|| format!("Failed to dispatch {verb} {path}"))?;
            Ok(serde_json::to_string_pretty(&result)?)
        }
    }
}

/// Execute the parsed command line and print its output to stdout.
///
/// # Errors
///
/// See [`execute`].
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let output = execute(&cli.command)?;
    println!("{output}");
    Ok(())
}
