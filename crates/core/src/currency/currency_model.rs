//! Currency configuration and formatting option models.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CURRENCY_CODE, DEFAULT_CURRENCY_NAME, DEFAULT_CURRENCY_SYMBOL, DEFAULT_LOCALE,
};
use crate::errors::{Error, Result};

/// The single currency the dashboard displays amounts in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyConfig {
    /// ISO 4217 code (e.g. "INR")
    pub code: String,
    /// Symbol prefixed to amounts (e.g. "₹")
    pub symbol: String,
    /// Human readable name
    pub name: String,
    /// BCP 47 locale tag driving digit grouping (e.g. "en-IN")
    pub locale: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: DEFAULT_CURRENCY_CODE.to_string(),
            symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            name: DEFAULT_CURRENCY_NAME.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl CurrencyConfig {
    pub fn new(code: &str, symbol: &str, name: &str, locale: &str) -> Self {
        Self {
            code: code.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            locale: locale.to_string(),
        }
    }

    /// US dollar with western grouping.
    pub fn usd() -> Self {
        Self::new("USD", "$", "US Dollar", "en-US")
    }

    /// Checks the configuration before it is frozen into a formatter.
    pub fn validate(&self) -> Result<()> {
        if self.code.len() != 3 || !self.code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(Error::InvalidConfig(format!(
                "currency code '{}' must be three uppercase letters",
                self.code
            )));
        }
        if self.symbol.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "currency symbol must not be empty".to_string(),
            ));
        }
        // Formatted amounts must parse back, so the symbol cannot carry
        // number characters or magnitude letters.
        if let Some(c) = self.symbol.chars().find(|c| {
            c.is_ascii_digit()
                || c.is_whitespace()
                || matches!(c, '.' | ',' | '+' | '-' | 'K' | 'k' | 'M' | 'm' | 'B' | 'b')
        }) {
            return Err(Error::InvalidConfig(format!(
                "currency symbol '{}' must not contain '{}'",
                self.symbol, c
            )));
        }
        if self.locale.trim().is_empty() {
            return Err(Error::InvalidConfig("locale must not be empty".to_string()));
        }
        Ok(())
    }

    /// Digit grouping used by this configuration's locale.
    pub fn grouping(&self) -> GroupingStyle {
        GroupingStyle::from_locale(&self.locale)
    }
}

/// How the integer digits of a full-notation amount are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupingStyle {
    /// Groups of three: 8,700,000
    Western,
    /// Last three digits, then groups of two: 87,00,000
    Indian,
}

impl GroupingStyle {
    /// Resolves the grouping for a locale tag. Only the region subtag matters;
    /// `IN` selects Indian grouping, everything else groups by three.
    pub fn from_locale(locale: &str) -> Self {
        let region = locale
            .split(['-', '_'])
            .nth(1)
            .map(|r| r.to_ascii_uppercase());
        match region.as_deref() {
            Some("IN") => GroupingStyle::Indian,
            Some(_) => GroupingStyle::Western,
            None => {
                warn!("Locale '{}' has no region, grouping digits by three", locale);
                GroupingStyle::Western
            }
        }
    }

    /// Inserts `,` separators into a run of ASCII digits.
    pub fn group(&self, digits: &str) -> String {
        let len = digits.len();
        if len <= 3 {
            return digits.to_string();
        }

        let (head, tail) = digits.split_at(len - 3);
        let head_group = match self {
            GroupingStyle::Western => 3,
            GroupingStyle::Indian => 2,
        };

        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(head_group);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();

        let mut out = groups.join(",");
        out.push(',');
        out.push_str(tail);
        out
    }
}

/// Per-call formatting options. The currency itself is fixed by the
/// formatter's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Abbreviate with K/M/B (e.g. "₹2.4M")
    pub compact: bool,
    /// Fixed fraction digits. `None` means 0 for full notation and "up to
    /// one, trailing zero trimmed" for compact notation.
    pub decimals: Option<u32>,
    /// Prefix the currency symbol
    pub show_symbol: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            compact: false,
            decimals: None,
            show_symbol: true,
        }
    }
}

impl FormatOptions {
    pub fn compact() -> Self {
        Self {
            compact: true,
            ..Self::default()
        }
    }

    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    pub fn without_symbol(mut self) -> Self {
        self.show_symbol = false;
        self
    }
}
