use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod output;

use cli::Cli;

const DEFAULT_LOG_FILTER: &str = "sts_eval=info,sts_eval_core=info,sts_eval_metrics=info,sts_eval_workflow=info";

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = config::load()?;
    tracing::debug!(?config, "Configuration loaded");

    commands::run(&cli.command, config)
}
