//! Init and Config commands.

use serde_json::json;

use crate::cli::commands::compute::print_envelope;
use crate::config::Settings;
use crate::io::{Envelope, ExitCode, OutputFormat, ResultCode};

/// Run init command - create configuration file in the current directory.
pub fn run_init(force: bool, format: OutputFormat) -> ExitCode {
    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => return report_error(format, format!("Cannot resolve current directory: {e}")),
    };

    match Settings::init_config_file(&root, force) {
        Ok(path) => {
            if format.is_json() {
                let envelope = Envelope::success(json!({ "path": path.display().to_string() }))
                    .with_operation("init")
                    .with_message("Created configuration file");
                print_envelope(&envelope);
            } else {
                println!("Created configuration file at: {}", path.display());
                println!("Edit this file to customize your settings.");
            }
            ExitCode::Success
        }
        Err(e) => report_error(format, e.to_string()),
    }
}

/// Run config command - display current configuration.
pub fn run_config(config: &Settings, format: OutputFormat) -> ExitCode {
    if format.is_json() {
        print_envelope(&Envelope::success(config).with_operation("config"));
        return ExitCode::Success;
    }

    match toml::to_string_pretty(config) {
        Ok(toml_str) => {
            println!("Current Configuration:");
            println!("{}", "=".repeat(50));
            println!("{toml_str}");
            ExitCode::Success
        }
        Err(e) => report_error(format, format!("Error displaying config: {e}")),
    }
}

fn report_error(format: OutputFormat, message: String) -> ExitCode {
    if format.is_json() {
        let envelope: Envelope<()> = Envelope::error(ResultCode::ConfigError, message);
        print_envelope(&envelope);
    } else {
        eprintln!("Error: {message}");
    }
    ResultCode::ConfigError.exit_code()
}
