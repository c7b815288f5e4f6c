//! yomtov CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use yomtov_core::{TracingConfig, init_tracing};

use yomtov_client::cli::{Cli, Command, ConfigAction};
use yomtov_client::commands;
use yomtov_client::config::ClientConfig;
use yomtov_client::error::{ClientError, ClientResult};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(TracingConfig::for_cli(cli.debug)) {
        eprintln!("warning: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ClientResult<()> {
    let mut config = match cli.config {
        Some(ref path) => ClientConfig::load_from(path).map_err(ClientError::Config)?,
        None => ClientConfig::load().map_err(ClientError::Config)?,
    };
    config.merge_cli(&cli);
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        },
        None => {
            config.validate().map_err(ClientError::Config)?;
            commands::show::run(&config, cli.output_format(), cli.today)
        }
    }
}
