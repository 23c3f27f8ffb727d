//! Core error types for the metricdeck transform layer.
//!
//! Each component owns a narrow error type (`ParseError` for the magnitude
//! parser, `FormatError` for the currency formatter, `DataError` for catalog
//! and dataset problems). The root [`Error`] wraps them so callers that chain
//! several operations can propagate with `?`.

use thiserror::Error;

use crate::currency::{FormatError, ParseError};

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the transform layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Magnitude parsing failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Currency formatting failed: {0}")]
    Format(#[from] FormatError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),
}

/// Errors caused by the shape of caller-supplied data: the metric catalog or
/// a row sequence.
///
/// These are never swallowed by the core. The presentation layer decides
/// whether to render an empty state or abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Two sections visible to the same audience share an `order` value.
    #[error("Sections '{first_id}' and '{second_id}' share order {order} in the {audience} catalog")]
    DuplicateOrder {
        audience: String,
        order: u32,
        first_id: String,
        second_id: String,
    },

    /// A section declares order 0. Orders start at 1.
    #[error("Section '{0}' has order 0; orders start at 1")]
    ZeroOrder(String),

    /// Two sections share the same id.
    #[error("Section id '{0}' is declared more than once")]
    DuplicateSectionId(String),

    /// A sort, filter or aggregate key is not carried by any row.
    #[error("No row carries the field '{field}'")]
    MissingField { field: String },
}

impl DataError {
    /// Creates a MissingField error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
