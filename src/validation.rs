//! Validation and formatting helpers.

use serde_json::Value;
use tracing::debug;

use crate::error::{CalcError, CalcResult};
use crate::number::Number;

/// Largest input whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: i64 = 34;

/// Validate that an arbitrary input is a positive number.
///
/// Returns `TypeMismatch` for anything that is not a JSON number (strings,
/// booleans, null, arrays, objects) and `InvalidArgument` for numbers `<= 0`.
pub fn validate_positive(value: &Value) -> CalcResult<bool> {
    let number = Number::from_json(value).ok_or_else(|| {
        debug!(%value, "validation input is not a number");
        CalcError::type_mismatch("Input must be a number")
    })?;
    validate_positive_number(number)
}

/// Validate that a number is positive.
pub fn validate_positive_number(number: impl Into<Number>) -> CalcResult<bool> {
    let number = number.into();
    if !number.is_positive() {
        debug!(%number, "validation input is not positive");
        return Err(CalcError::invalid_argument("Number must be positive"));
    }
    Ok(true)
}

/// Format a number as currency with exactly two decimal places.
pub fn format_currency(amount: impl Into<Number>) -> String {
    format!("${:.2}", amount.into().as_f64())
}

/// Check if a number is even.
pub fn is_even(number: impl Into<Number>) -> bool {
    match number.into() {
        Number::Int(i) => i % 2 == 0,
        Number::Float(f) => f % 2.0 == 0.0,
    }
}

/// Calculate the factorial of `n`.
///
/// Inputs above [`MAX_FACTORIAL_INPUT`] are rejected up front rather than
/// overflowing partway through the recursion.
pub fn factorial(n: i64) -> CalcResult<u128> {
    if n < 0 {
        debug!(n, "rejecting negative factorial input");
        return Err(CalcError::invalid_argument(
            "Factorial is not defined for negative numbers",
        ));
    }
    if n > MAX_FACTORIAL_INPUT {
        debug!(n, "factorial input too large");
        return Err(CalcError::Overflow {
            operation: "factorial",
        });
    }
    Ok(factorial_unchecked(n as u128))
}

fn factorial_unchecked(n: u128) -> u128 {
    if n <= 1 {
        return 1;
    }
    n * factorial_unchecked(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_positive() {
        assert_eq!(validate_positive(&json!(5)), Ok(true));
        assert_eq!(validate_positive(&json!(2.5)), Ok(true));

        for input in [json!(-1), json!(0), json!(-0.25)] {
            assert_eq!(
                validate_positive(&input),
                Err(CalcError::invalid_argument("Number must be positive"))
            );
        }
    }

    #[test]
    fn test_validate_positive_type_mismatch() {
        for input in [json!("5"), json!(true), json!(null), json!([1]), json!({"n": 1})] {
            assert_eq!(
                validate_positive(&input),
                Err(CalcError::type_mismatch("Input must be a number")),
                "{input}"
            );
        }
    }

    #[test]
    fn test_validate_positive_number() {
        assert_eq!(validate_positive_number(1), Ok(true));
        assert!(validate_positive_number(0.0).is_err());
        assert!(validate_positive_number(f64::NAN).is_err());
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_format_currency() {
        assert_eq!(format_currency(10), "$10.00");
        assert_eq!(format_currency(3.14159), "$3.14");
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(1234.5), "$1234.50");
        assert_eq!(format_currency(-2), "$-2.00");
    }

    #[test]
    fn test_is_even() {
        assert!(is_even(2));
        assert!(is_even(4));
        assert!(!is_even(1));
        assert!(!is_even(3));
        assert!(is_even(0));
        assert!(is_even(-4));
        assert!(!is_even(-3));
        assert!(is_even(6.0));
        assert!(!is_even(2.5));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Ok(1));
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(3), Ok(6));
    }

    #[test]
    fn test_factorial_negative() {
        assert_eq!(
            factorial(-1),
            Err(CalcError::invalid_argument(
                "Factorial is not defined for negative numbers"
            ))
        );
    }

    #[test]
    fn test_factorial_bounds() {
        assert_eq!(
            factorial(MAX_FACTORIAL_INPUT),
            Ok(295_232_799_039_604_140_847_618_609_643_520_000_000)
        );
        assert_eq!(
            factorial(MAX_FACTORIAL_INPUT + 1),
            Err(CalcError::Overflow {
                operation: "factorial"
            })
        );
    }
}
