//! # calcdemo
//!
//! A small calculator used to exercise a CI/CD pipeline: arithmetic helpers,
//! input validation, currency formatting, and a CLI that prints sample results.
//!
//! ```
//! use calcdemo::{Number, add, factorial, format_currency};
//!
//! assert_eq!(add(5, 3).unwrap(), Number::Int(8));
//! assert_eq!(factorial(5).unwrap(), 120);
//! assert_eq!(format_currency(10), "$10.00");
//! ```

pub mod arithmetic;
pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod number;
pub mod validation;

pub use arithmetic::{add, multiply, rectangle_area};
pub use config::Settings;
pub use error::{CalcError, CalcResult};
pub use number::Number;
pub use validation::{
    MAX_FACTORIAL_INPUT, factorial, format_currency, is_even, validate_positive,
    validate_positive_number,
};
