// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! decree: the control-plane binary. `run` wires the engine, the reconciler,
//! and a set of provider/agent adapters together and drives them until
//! shutdown; the other subcommands are local, no-network utilities useful
//! while authoring a config or a worktree automation script.

mod null_adapters;
mod wiring;

use anyhow::Context;
use clap::{Parser, Subcommand};
use decree_adapters::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Parser)]
#[command(name = "decree", version, about = "Autonomous spec-to-revision control plane")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the control plane until interrupted.
    Run {
        #[arg(long, default_value = "decree.toml")]
        config: PathBuf,
        #[arg(long)]
        repo: Option<PathBuf>,
    },
    /// Load and validate a config file without starting anything.
    ValidateConfig {
        #[arg(long, default_value = "decree.toml")]
        config: PathBuf,
        #[arg(long)]
        repo: Option<PathBuf>,
    },
    /// Check whether a bash command would pass the implementor's command
    /// validator, and print why not if it wouldn't.
    CheckCommand {
        command: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run { config, repo } => run(config, repo).await,
        Command::ValidateConfig { config, repo } => validate_config(config, repo).await,
        Command::CheckCommand { command } => {
            check_command(&command);
            Ok(())
        }
    }
}

fn repo_root_or_cwd(repo: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match repo {
        Some(path) => Ok(path),
        None => std::env::current_dir().context("failed to resolve current directory"),
    }
}

async fn run(config_path: PathBuf, repo: Option<PathBuf>) -> anyhow::Result<()> {
    let repo_root = repo_root_or_cwd(repo)?;
    let config = Config::from_path(&config_path)
        .await
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    let shutdown = CancellationToken::new();
    let ctrl_c_shutdown = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown requested");
            ctrl_c_shutdown.cancel();
        }
    });

    let deps = wiring::Deps {
        work_items: Arc::new(null_adapters::NullWorkItemProvider),
        revisions: Arc::new(null_adapters::NullRevisionProvider),
        specs: Arc::new(null_adapters::NullSpecProvider),
        agent: Arc::new(null_adapters::NullAgentAdapter),
    };

    wiring::run(config, repo_root, deps, shutdown).await
}

async fn validate_config(config_path: PathBuf, repo: Option<PathBuf>) -> anyhow::Result<()> {
    let repo_root = repo_root_or_cwd(repo)?;
    let config = Config::from_path(&config_path)
        .await
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    config.validate(&repo_root).await.context("config failed validation")?;
    println!("{} is valid", config_path.display());
    Ok(())
}

fn check_command(command: &str) {
    match decree_shell::validate_bash_command(command) {
        decree_shell::ValidationOutcome::Allowed => println!("allowed"),
        decree_shell::ValidationOutcome::Blocked { reason } => println!("blocked: {reason}"),
    }
}
