use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use cb_core::{AppConfig, Error};
use clap::Parser;
use tracing::info;

mod cli;
mod logging;
mod runner;

use cli::{Cli, API_KEY_VAR};
use runner::Runner;

/// A problem reported with a one-line message before any backend call.
#[derive(Debug, PartialEq, Eq)]
struct UsageError(String);

/// Everything checked before the first backend call.
#[derive(Debug)]
struct Preflight {
    config: AppConfig,
    api_key: Option<String>,
}

fn preflight(cli: &Cli, api_key: Option<String>) -> std::result::Result<Preflight, UsageError> {
    if cli.single_topic().is_none() && cli.calendar.is_none() {
        return Err(UsageError("Provide --topic or --calendar.".to_string()));
    }
    if !cli.config.exists() {
        return Err(UsageError(format!(
            "Config file missing: {}",
            cli.config.display()
        )));
    }
    let config = match AppConfig::load(&cli.config) {
        Ok(config) => config,
        Err(Error::Config(message)) => return Err(UsageError(message)),
        Err(e) => return Err(UsageError(format!("Invalid config {}: {}", cli.config.display(), e))),
    };
    let api_key = api_key.filter(|key| !key.trim().is_empty());
    if cli.backend.requires_api_key() && api_key.is_none() {
        return Err(UsageError(format!(
            "Missing {} environment variable.",
            API_KEY_VAR
        )));
    }
    Ok(Preflight { config, api_key })
}

async fn run(cli: Cli, preflight: Preflight) -> anyhow::Result<()> {
    let config = Arc::new(preflight.config);
    let model = cb_inference::create_model(cli.backend, &config.generation, preflight.api_key)
        .context("creating backend")?;
    info!(
        "🧠 Backend ready (using {}, model {})",
        model.name(),
        config.generation.model
    );
    let storage = cb_storage::create_storage(cli.storage_kind(), &cli.output)?;
    info!("💾 Storage ready (using {})", storage.name());

    let today = chrono::Local::now().date_naive();
    let runner = Runner::new(config, model, storage, today);
    let template = cli.request();

    if let Some(topic) = cli.single_topic() {
        runner
            .run_single(&template)
            .await
            .with_context(|| format!("generating \"{}\"", topic))?;
    }
    if let Some(period) = cli.calendar {
        info!("🗓️ Building {} calendar with {} articles", period, cli.count);
        let written = runner
            .run_calendar(&template, cli.count)
            .await
            .context("generating calendar")?;
        info!("✨ Calendar complete: {} articles", written.len());
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let checked = match preflight(&cli, std::env::var(API_KEY_VAR).ok()) {
        Ok(checked) => checked,
        Err(UsageError(message)) => {
            eprintln!("{}", message);
            return ExitCode::from(1);
        }
    };

    match run(cli, checked).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(1)
        }
    }
}
