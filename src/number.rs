//! Numeric operand type shared by the calculator operations.
//!
//! Integers stay integers through checked arithmetic; any floating point
//! operand promotes the result to `f64`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{CalcError, CalcResult};

/// An integer or floating point operand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Number::Int(i) => i < 0,
            Number::Float(f) => f < 0.0,
        }
    }

    /// True for values strictly greater than zero. NaN is never positive.
    pub fn is_positive(self) -> bool {
        match self {
            Number::Int(i) => i > 0,
            Number::Float(f) => f > 0.0,
        }
    }

    /// Convert a JSON value into a number, if it is one.
    ///
    /// Booleans are not numbers here even though some languages treat them so.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let serde_json::Value::Number(n) = value else {
            return None;
        };
        if let Some(i) = n.as_i64() {
            Some(Number::Int(i))
        } else {
            n.as_f64().map(Number::Float)
        }
    }

    /// Apply an integer operation when both sides are integers, otherwise
    /// fall back to the floating point one.
    ///
    /// Finite operands producing a non-finite float count as overflow.
    pub(crate) fn combine(
        self,
        other: Number,
        operation: &'static str,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> CalcResult<Number> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => int_op(a, b)
                .map(Number::Int)
                .ok_or(CalcError::Overflow { operation }),
            (a, b) => {
                let (x, y) = (a.as_f64(), b.as_f64());
                let result = float_op(x, y);
                if x.is_finite() && y.is_finite() && !result.is_finite() {
                    return Err(CalcError::Overflow { operation });
                }
                Ok(Number::Float(result))
            }
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) if x.abs() >= 1e16 => write!(f, "{x:e}"),
            // Whole floats keep a trailing ".0" so they read as floats
            Number::Float(x) if x.fract() == 0.0 => write!(f, "{x:.1}"),
            Number::Float(x) => write!(f, "{x}"),
        }
    }
}

impl FromStr for Number {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Number::Float(f)),
            _ => Err(CalcError::type_mismatch(format!(
                "Input must be a number, got '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_prefers_integers() {
        assert_eq!("42".parse::<Number>().unwrap(), Number::Int(42));
        assert_eq!("-7".parse::<Number>().unwrap(), Number::Int(-7));
        assert_eq!("2.5".parse::<Number>().unwrap(), Number::Float(2.5));
    }

    #[test]
    fn test_parse_rejects_text_and_non_finite() {
        for input in ["abc", "", "inf", "NaN"] {
            let err = input.parse::<Number>().unwrap_err();
            assert!(matches!(err, CalcError::TypeMismatch { .. }), "{input}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::Int(8).to_string(), "8");
        assert_eq!(Number::Float(4.0).to_string(), "4.0");
        assert_eq!(Number::Float(3.25).to_string(), "3.25");
        assert_eq!(Number::Float(-0.5).to_string(), "-0.5");
    }

    #[test]
    fn test_display_large_floats_use_exponent() {
        assert_eq!(Number::Float(1e308).to_string(), "1e308");
        assert_eq!(Number::Float(-2.5e20).to_string(), "-2.5e20");
        assert_eq!(Number::Float(1e15).to_string(), "1000000000000000.0");
    }

    #[test]
    fn test_from_json() {
        assert_eq!(Number::from_json(&json!(5)), Some(Number::Int(5)));
        assert_eq!(Number::from_json(&json!(2.75)), Some(Number::Float(2.75)));
        assert_eq!(Number::from_json(&json!("5")), None);
        assert_eq!(Number::from_json(&json!(true)), None);
        assert_eq!(Number::from_json(&json!(null)), None);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&Number::Int(24)).unwrap(), "24");
        assert_eq!(serde_json::to_string(&Number::Float(1.5)).unwrap(), "1.5");
    }

    #[test]
    fn test_sign_checks() {
        assert!(Number::Int(-1).is_negative());
        assert!(!Number::Int(0).is_negative());
        assert!(!Number::Int(0).is_positive());
        assert!(Number::Float(0.1).is_positive());
        assert!(!Number::Float(f64::NAN).is_positive());
    }
}
