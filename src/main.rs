//! tabctl - browser tab control
//!
//! Main entry point for the CLI application.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use tabctl::cli::{error_report, usage_outcome, Cli, Console, Dispatcher};
use tabctl::{Config, ScriptAdapter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Usage errors go to stdout with the help text and exit 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let (text, code) = usage_outcome(&err);
            println!("{}", text);
            return Ok(ExitCode::from(code));
        }
    };

    // Build configuration; a broken config file is reported once logging is up
    let (mut config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::from_env(), Some(e)),
    };

    // Apply CLI overrides
    if let Some(ref browser) = cli.browser {
        config.set_application(browser.clone());
    }

    if cli.debug {
        config.logging.level = "debug".to_string();
    }

    // Logs go to stderr; stdout carries command output only
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    if let Some(e) = config_error {
        warn!("{}; using defaults", e);
    }

    let adapter = ScriptAdapter::from_config(&config.browser);
    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut dispatcher = Dispatcher::new(&adapter, cli.options(), console);

    match dispatcher.run(cli.verb).await {
        Ok(outcome) => {
            debug!("{:?}", outcome);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            println!("{}", error_report(&err));
            Ok(ExitCode::from(err.exit_code()))
        }
    }
}
