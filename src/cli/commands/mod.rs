//! Command implementations for the CLI.
//!
//! Each command is implemented in its own module.

pub mod compute;
pub mod demo;
pub mod init;

use crate::cli::Commands;
use crate::config::Settings;
use crate::io::{ExitCode, OutputFormat};

use compute::Calculation;

/// Run a parsed command and return the process exit code.
pub fn dispatch(command: Commands, settings: &Settings, format: OutputFormat) -> ExitCode {
    crate::debug_event!("cli", "dispatch", "{command:?}");
    match command {
        Commands::Demo => demo::run(format),
        Commands::Add { a, b } => compute::run(Calculation::Add { a, b }, format),
        Commands::Multiply { a, b } => compute::run(Calculation::Multiply { a, b }, format),
        Commands::Area { length, width } => {
            compute::run(Calculation::Area { length, width }, format)
        }
        Commands::Validate { value } => compute::run(Calculation::Validate { raw: value }, format),
        Commands::Currency { amount } => compute::run(Calculation::Currency { amount }, format),
        Commands::Even { number } => compute::run(Calculation::Even { number }, format),
        Commands::Factorial { n } => compute::run(Calculation::Factorial { n }, format),
        Commands::Init { force } => init::run_init(force, format),
        Commands::Config => init::run_config(settings, format),
    }
}
