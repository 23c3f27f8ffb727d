//! Magnitude parsing for pre-formatted metric strings.
//!
//! Dashboard values arrive as display strings: `"₹8.7M"`, `"$125K"`,
//! `"1,250"`, `"3.2M AED"`, `"7.2/10"`. [`parse_magnitude`] recovers the
//! canonical amount:
//!
//! 1. The first numeric run (optional sign, digits, `,` separators, optional
//!    decimal point) is extracted. A sign written in front of a currency
//!    symbol or code (`"-₹2.4M"`, `"-AED2.4M"`) still applies.
//! 2. Separators are stripped and the run is read as `f64`.
//! 3. The whole input is scanned for the first `K`, `M` or `B` (any case) and
//!    the value is scaled by it.
//!
//! Step 3 looks at every character, not just the ones after the number, so
//! unrelated letters count too: `"2 Miles"` parses as two million and
//! `"4m 32s"` as four million. Inputs like that are not magnitude strings
//! and callers should not feed them here.
//!
//! ```
//! use metricdeck_core::currency::parse_magnitude;
//!
//! assert_eq!(parse_magnitude("₹8.7M").unwrap(), 8_700_000.0);
//! assert_eq!(parse_magnitude("1,250").unwrap(), 1_250.0);
//! assert!(parse_magnitude("Low").is_err());
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ParseError;

/// Numeric run, optionally preceded by a sign and a symbol or currency code
/// (`-₹`, `-AED`). The prefix holds no whitespace, digits, `.`, `,` or signs.
static NUMERIC_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?P<sign>[-+])?[^\s0-9.,+-]*(?P<number>[0-9][0-9,]*(?:\.[0-9]*)?|\.[0-9]+)")
        .expect("Invalid regex pattern")
});

/// Magnitude suffix recognised in a display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Magnitude {
    Units,
    Thousands,
    Millions,
    Billions,
}

impl Magnitude {
    /// Scale factor applied to the parsed number.
    pub fn multiplier(&self) -> f64 {
        match self {
            Magnitude::Units => 1.0,
            Magnitude::Thousands => 1_000.0,
            Magnitude::Millions => 1_000_000.0,
            Magnitude::Billions => 1_000_000_000.0,
        }
    }

    /// Compact-notation letter, `None` for plain units.
    pub fn suffix(&self) -> Option<char> {
        match self {
            Magnitude::Units => None,
            Magnitude::Thousands => Some('K'),
            Magnitude::Millions => Some('M'),
            Magnitude::Billions => Some('B'),
        }
    }

    /// Largest magnitude whose multiplier does not exceed `abs_amount`.
    pub fn for_amount(abs_amount: f64) -> Self {
        if abs_amount >= 1_000_000_000.0 {
            Magnitude::Billions
        } else if abs_amount >= 1_000_000.0 {
            Magnitude::Millions
        } else if abs_amount >= 1_000.0 {
            Magnitude::Thousands
        } else {
            Magnitude::Units
        }
    }

    /// Next larger magnitude, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            Magnitude::Units => Some(Magnitude::Thousands),
            Magnitude::Thousands => Some(Magnitude::Millions),
            Magnitude::Millions => Some(Magnitude::Billions),
            Magnitude::Billions => None,
        }
    }

    /// Finds the first K/M/B letter anywhere in `input`.
    pub fn detect(input: &str) -> Self {
        input
            .chars()
            .find_map(|c| match c.to_ascii_uppercase() {
                'K' => Some(Magnitude::Thousands),
                'M' => Some(Magnitude::Millions),
                'B' => Some(Magnitude::Billions),
                _ => None,
            })
            .unwrap_or(Magnitude::Units)
    }
}

/// Parses a free-form magnitude string into a canonical amount.
pub fn parse_magnitude(input: &str) -> Result<f64, ParseError> {
    let captures = NUMERIC_RUN_REGEX
        .captures(input)
        .ok_or_else(|| ParseError::NoNumericValue(input.to_string()))?;

    let digits: String = captures["number"].chars().filter(|c| *c != ',').collect();
    let value: f64 = digits
        .parse()
        .map_err(|_| ParseError::NoNumericValue(input.to_string()))?;

    let signed = match captures.name("sign").map(|m| m.as_str()) {
        Some("-") => -value,
        _ => value,
    };

    Ok(signed * Magnitude::detect(input).multiplier())
}
