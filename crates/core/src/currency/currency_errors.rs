use thiserror::Error;

/// Errors raised by the magnitude parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input holds no digits at all (e.g. `"Low"`).
    #[error("No numeric value found in '{0}'")]
    NoNumericValue(String),
}

/// Errors raised by the currency formatter.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    /// NaN and infinities have no display form.
    #[error("Cannot format non-finite amount {0}")]
    NonFinite(f64),
}
