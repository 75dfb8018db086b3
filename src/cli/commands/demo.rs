//! Demo command - the default when no subcommand is given.

use serde_json::Value;

use crate::arithmetic::{add, multiply, rectangle_area};
use crate::cli::commands::compute::{CommandOutput, ResultValue, print_envelope};
use crate::error::CalcResult;
use crate::io::{Envelope, ExitCode, OutputFormat};

pub const BANNER: &str = "Welcome to the CI/CD Demo Calculator!";

/// The four demo lines: banner, sum, product and rectangle area.
pub fn demo_lines() -> CalcResult<Vec<String>> {
    Ok(vec![
        BANNER.to_string(),
        format!("5 + 3 = {}", add(5, 3)?),
        format!("4 * 6 = {}", multiply(4, 6)?),
        format!("Rectangle area (5x3) = {}", rectangle_area(5, 3)?),
    ])
}

/// Run the demo command.
pub fn run(format: OutputFormat) -> ExitCode {
    let lines = match demo_lines() {
        Ok(lines) => lines,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(&err);
        }
    };

    if format.is_json() {
        let envelope = Envelope::success(CommandOutput {
            operation: "demo",
            inputs: Value::Null,
            result: ResultValue::Lines(lines),
        })
        .with_operation("demo");
        print_envelope(&envelope);
    } else {
        for line in &lines {
            println!("{line}");
        }
    }
    ExitCode::Success
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_lines() {
        assert_eq!(
            demo_lines().unwrap(),
            vec![
                "Welcome to the CI/CD Demo Calculator!",
                "5 + 3 = 8",
                "4 * 6 = 24",
                "Rectangle area (5x3) = 15",
            ]
        );
    }
}
