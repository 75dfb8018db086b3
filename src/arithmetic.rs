//! Arithmetic operations: addition, multiplication and rectangle area.
//!
//! Integer inputs use checked arithmetic and report [`CalcError::Overflow`]
//! instead of wrapping.

use tracing::debug;

use crate::error::{CalcError, CalcResult};
use crate::number::Number;

/// Add two numbers together.
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
    let (a, b) = (a.into(), b.into());
    debug!(%a, %b, "performing addition");
    a.combine(b, "add", i64::checked_add, |x, y| x + y)
}

/// Multiply two numbers together.
pub fn multiply(a: impl Into<Number>, b: impl Into<Number>) -> CalcResult<Number> {
    let (a, b) = (a.into(), b.into());
    debug!(%a, %b, "performing multiplication");
    a.combine(b, "multiply", i64::checked_mul, |x, y| x * y)
}

/// Calculate the area of a rectangle.
///
/// Zero-length sides are allowed; negative ones are rejected.
pub fn rectangle_area(length: impl Into<Number>, width: impl Into<Number>) -> CalcResult<Number> {
    let (length, width) = (length.into(), width.into());
    if length.is_negative() || width.is_negative() {
        debug!(%length, %width, "rejecting negative rectangle dimensions");
        return Err(CalcError::invalid_argument(
            "Length and width must be positive",
        ));
    }
    multiply(length, width)
}
