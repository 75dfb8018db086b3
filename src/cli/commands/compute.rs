//! Single-operation commands: add, multiply, area, validate, currency, even, factorial.

use std::time::Instant;

use serde::Serialize;
use serde_json::{Value, json};

use crate::arithmetic::{add, multiply, rectangle_area};
use crate::error::{CalcError, CalcResult};
use crate::io::{Envelope, ExitCode, OutputFormat};
use crate::number::Number;
use crate::validation::{factorial, format_currency, is_even, validate_positive};

/// One calculator operation with its parsed operands.
#[derive(Debug, Clone, PartialEq)]
pub enum Calculation {
    Add { a: Number, b: Number },
    Multiply { a: Number, b: Number },
    Area { length: Number, width: Number },
    /// Raw CLI text; read as JSON when it parses, otherwise kept as a string.
    Validate { raw: String },
    Currency { amount: Number },
    Even { number: Number },
    Factorial { n: i64 },
}

/// Result payload of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultValue {
    Number(Number),
    Bool(bool),
    Text(String),
    Integer(u128),
    Lines(Vec<String>),
}

/// Data section of the JSON envelope.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput {
    pub operation: &'static str,
    pub inputs: Value,
    pub result: ResultValue,
}

/// A successful evaluation: the payload plus its human-readable line.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluated {
    pub result: ResultValue,
    pub line: String,
}

/// Interpret validation input: JSON when it parses, plain text otherwise.
///
/// Numeric literals too large for `f64` (e.g. `1e400`) are `InvalidArgument`,
/// not text.
pub fn parse_validation_input(raw: &str) -> CalcResult<Value> {
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(_) if is_out_of_range_literal(raw) => {
            Err(CalcError::invalid_argument("Number is out of range"))
        }
        Err(_) => Ok(Value::String(raw.to_string())),
    }
}

fn is_out_of_range_literal(raw: &str) -> bool {
    let raw = raw.trim();
    raw.bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        && raw.parse::<f64>().is_ok_and(f64::is_infinite)
}

impl Calculation {
    pub fn name(&self) -> &'static str {
        match self {
            Calculation::Add { .. } => "add",
            Calculation::Multiply { .. } => "multiply",
            Calculation::Area { .. } => "area",
            Calculation::Validate { .. } => "validate",
            Calculation::Currency { .. } => "currency",
            Calculation::Even { .. } => "even",
            Calculation::Factorial { .. } => "factorial",
        }
    }

    pub fn inputs(&self) -> Value {
        match self {
            Calculation::Add { a, b } | Calculation::Multiply { a, b } => json!({ "a": a, "b": b }),
            Calculation::Area { length, width } => json!({ "length": length, "width": width }),
            Calculation::Validate { raw } => {
                let value = parse_validation_input(raw).unwrap_or_else(|_| json!(raw));
                json!({ "value": value })
            }
            Calculation::Currency { amount } => json!({ "amount": amount }),
            Calculation::Even { number } => json!({ "number": number }),
            Calculation::Factorial { n } => json!({ "n": n }),
        }
    }

    pub fn evaluate(&self) -> CalcResult<Evaluated> {
        let evaluated = match self {
            Calculation::Add { a, b } => {
                let sum = add(*a, *b)?;
                Evaluated {
                    result: ResultValue::Number(sum),
                    line: format!("{a} + {b} = {sum}"),
                }
            }
            Calculation::Multiply { a, b } => {
                let product = multiply(*a, *b)?;
                Evaluated {
                    result: ResultValue::Number(product),
                    line: format!("{a} * {b} = {product}"),
                }
            }
            Calculation::Area { length, width } => {
                let area = rectangle_area(*length, *width)?;
                Evaluated {
                    result: ResultValue::Number(area),
                    line: format!("Rectangle area ({length}x{width}) = {area}"),
                }
            }
            Calculation::Validate { raw } => {
                let value = parse_validation_input(raw)?;
                let valid = validate_positive(&value)?;
                Evaluated {
                    result: ResultValue::Bool(valid),
                    line: format!("{value} is a positive number"),
                }
            }
            Calculation::Currency { amount } => {
                let formatted = format_currency(*amount);
                Evaluated {
                    line: formatted.clone(),
                    result: ResultValue::Text(formatted),
                }
            }
            Calculation::Even { number } => {
                let even = is_even(*number);
                let parity = if even { "even" } else { "odd" };
                Evaluated {
                    result: ResultValue::Bool(even),
                    line: format!("{number} is {parity}"),
                }
            }
            Calculation::Factorial { n } => {
                let value = factorial(*n)?;
                Evaluated {
                    result: ResultValue::Integer(value),
                    line: format!("{n}! = {value}"),
                }
            }
        };
        Ok(evaluated)
    }
}

/// Evaluate a calculation and print the outcome in the requested format.
pub fn run(calculation: Calculation, format: OutputFormat) -> ExitCode {
    let started = Instant::now();
    let outcome = calculation.evaluate();
    let elapsed = started.elapsed().as_micros() as u64;

    match outcome {
        Ok(evaluated) => {
            crate::log_event!(calculation.name(), "computed", "{}", evaluated.line);
            if format.is_json() {
                let envelope = Envelope::success(CommandOutput {
                    operation: calculation.name(),
                    inputs: calculation.inputs(),
                    result: evaluated.result,
                })
                .with_operation(calculation.name())
                .with_message(evaluated.line)
                .with_duration_us(elapsed);
                print_envelope(&envelope);
            } else {
                println!("{}", evaluated.line);
            }
            ExitCode::Success
        }
        Err(err) => {
            crate::log_event!(calculation.name(), "failed", "{err}");
            if format.is_json() {
                let envelope: Envelope<CommandOutput> = Envelope::from_calc_error(&err)
                    .with_error_context(calculation.inputs())
                    .with_operation(calculation.name())
                    .with_duration_us(elapsed);
                print_envelope(&envelope);
            } else {
                eprintln!("Error: {err}");
            }
            ExitCode::from(&err)
        }
    }
}

pub(crate) fn print_envelope<T: Serialize>(envelope: &Envelope<T>) {
    match envelope.to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing output: {e}"),
    }
}
