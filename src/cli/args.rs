//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the Commands enum.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::number::Number;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Demonstration calculator
#[derive(Parser, Debug)]
#[command(
    name = "calcdemo",
    version = env!("CARGO_PKG_VERSION"),
    about = "CI/CD demo calculator",
    long_about = "Run arithmetic and validation helpers. Without a command, prints the demo results.",
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output results as a JSON envelope
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Print the welcome banner and sample results (default)
    Demo,

    /// Add two numbers
    Add {
        #[arg(allow_negative_numbers = true)]
        a: Number,
        #[arg(allow_negative_numbers = true)]
        b: Number,
    },

    /// Multiply two numbers
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: Number,
        #[arg(allow_negative_numbers = true)]
        b: Number,
    },

    /// Area of a rectangle
    Area {
        #[arg(allow_negative_numbers = true)]
        length: Number,
        #[arg(allow_negative_numbers = true)]
        width: Number,
    },

    /// Check that a value is a positive number
    #[command(after_help = "VALUE is read as JSON when possible: 5 is a number, '\"5\"' is text.")]
    Validate {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Format an amount as currency
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: Number,
    },

    /// Check whether a number is even
    Even {
        #[arg(allow_negative_numbers = true)]
        number: Number,
    },

    /// Factorial of a non-negative integer
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Write a default .calcdemo/settings.toml
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Display active settings
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_demo() {
        let cli = Cli::try_parse_from(["calcdemo"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_negative_operands() {
        let cli = Cli::try_parse_from(["calcdemo", "area", "-5", "3"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Area {
                length: Number::Int(-5),
                width: Number::Int(3),
            })
        );

        let cli = Cli::try_parse_from(["calcdemo", "factorial", "-1"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Factorial { n: -1 }));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["calcdemo", "add", "1.5", "2", "--json"]).unwrap();
        assert!(cli.json);
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                a: Number::Float(1.5),
                b: Number::Int(2),
            })
        );
    }

    #[test]
    fn test_non_numeric_operand_is_rejected() {
        assert!(Cli::try_parse_from(["calcdemo", "multiply", "four", "6"]).is_err());
    }
}
