use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;

use calcdemo::cli::{Cli, Commands, commands};
use calcdemo::config::Settings;
use calcdemo::io::{Envelope, OutputFormat, ResultCode};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            if cli.json {
                let envelope: Envelope<()> =
                    Envelope::error(ResultCode::ConfigError, format!("{e:#}"));
                if let Ok(json) = envelope.to_json() {
                    println!("{json}");
                }
            } else {
                eprintln!("Error: {e:#}");
            }
            return ResultCode::ConfigError.exit_code().into();
        }
    };

    calcdemo::logging::init_with_config(&settings.logging);

    let format = OutputFormat::from_json_flag(cli.json, settings.output.format);
    let command = cli.command.unwrap_or(Commands::Demo);
    commands::dispatch(command, &settings, format).into()
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("Configuration file not found: {}", path.display());
            }
            Settings::load_from(path)
                .map_err(|e| anyhow!(e))
                .with_context(|| format!("Failed to load {}", path.display()))
        }
        None => Settings::load()
            .map_err(|e| anyhow!(e))
            .context("Failed to load settings"),
    }
}
