//! Currency module - magnitude parsing and locale-aware currency formatting.
//!
//! - [`magnitude`] turns display strings such as `"₹8.7M"` or `"1,250"` into
//!   canonical amounts.
//! - [`currency_formatter`] renders canonical amounts back into display strings
//!   for the single process-wide currency configuration.

mod currency_errors;
pub mod currency_formatter;
mod currency_model;
pub mod magnitude;


pub use currency_errors::{FormatError, ParseError};
pub use currency_formatter::{format_count, format_ratio_percent, CurrencyFormatter};
pub use currency_model::{CurrencyConfig, FormatOptions, GroupingStyle};
pub use magnitude::{parse_magnitude, Magnitude};
