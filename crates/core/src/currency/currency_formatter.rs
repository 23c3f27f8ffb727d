//! Currency formatting for canonical amounts.

use log::{debug, warn};

use super::magnitude::{parse_magnitude, Magnitude};
use super::{CurrencyConfig, FormatError, FormatOptions, GroupingStyle};
use crate::constants::COMPACT_DEFAULT_DECIMALS;
use crate::errors::Result;
use crate::utils::decimal_utils::fixed_digits;

/// Formats amounts for one fixed currency configuration.
///
/// The configuration is validated once in [`CurrencyFormatter::new`] and never
/// changes afterwards; only the per-call [`FormatOptions`] vary. The formatter
/// holds no interior mutability, so a single instance can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    config: CurrencyConfig,
    grouping: GroupingStyle,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        let config = CurrencyConfig::default();
        let grouping = config.grouping();
        Self { config, grouping }
    }
}

impl CurrencyFormatter {
    /// Creates a formatter after validating the configuration.
    pub fn new(config: CurrencyConfig) -> Result<Self> {
        config.validate()?;
        let grouping = config.grouping();
        debug!(
            "Currency formatter configured for {} ({}) with {:?} grouping",
            config.code, config.locale, grouping
        );
        Ok(Self { config, grouping })
    }

    pub fn config(&self) -> &CurrencyConfig {
        &self.config
    }

    /// Renders `amount` according to `opts`.
    ///
    /// Fails only for NaN or infinite input.
    pub fn format(
        &self,
        amount: f64,
        opts: &FormatOptions,
    ) -> std::result::Result<String, FormatError> {
        if !amount.is_finite() {
            return Err(FormatError::NonFinite(amount));
        }

        let body = if opts.compact {
            self.compact_body(amount.abs(), opts.decimals)
        } else {
            self.full_body(amount.abs(), opts.decimals.unwrap_or(0))
        };

        let negative = amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0');
        let mut out = String::with_capacity(body.len() + self.config.symbol.len() + 1);
        if negative {
            out.push('-');
        }
        if opts.show_symbol {
            out.push_str(&self.config.symbol);
        }
        out.push_str(&body);
        Ok(out)
    }

    /// Parses a display string and re-renders it in this currency.
    ///
    /// Best effort: any parse or format failure returns `raw` untouched so a
    /// value like `"Low"` still reaches the screen.
    pub fn format_magnitude_str(&self, raw: &str, opts: &FormatOptions) -> String {
        match parse_magnitude(raw) {
            Ok(amount) => match self.format(amount, opts) {
                Ok(formatted) => formatted,
                Err(e) => {
                    warn!("Keeping '{}' as is: {}", raw, e);
                    raw.to_string()
                }
            },
            Err(e) => {
                warn!("Keeping '{}' as is: {}", raw, e);
                raw.to_string()
            }
        }
    }

    fn full_body(&self, abs_amount: f64, decimals: u32) -> String {
        let fixed = fixed_digits(abs_amount, decimals);
        self.group_fixed(&fixed)
    }

    fn compact_body(&self, abs_amount: f64, decimals: Option<u32>) -> String {
        let (dp, trim) = match decimals {
            Some(dp) => (dp, false),
            None => (COMPACT_DEFAULT_DECIMALS, true),
        };

        let mut magnitude = Magnitude::for_amount(abs_amount);
        let mut fixed = fixed_digits(abs_amount / magnitude.multiplier(), dp);

        // 999_999 rounds to "1000.0K"; promote so it reads "1M".
        while let Some(next) = magnitude.next() {
            let rounded: f64 = fixed.parse().unwrap_or(0.0);
            if rounded < 1_000.0 {
                break;
            }
            magnitude = next;
            fixed = fixed_digits(abs_amount / magnitude.multiplier(), dp);
        }

        if trim && fixed.contains('.') {
            fixed = fixed.trim_end_matches('0').trim_end_matches('.').to_string();
        }

        let mut body = self.group_fixed(&fixed);
        if let Some(suffix) = magnitude.suffix() {
            body.push(suffix);
        }
        body
    }

    fn group_fixed(&self, fixed: &str) -> String {
        match fixed.split_once('.') {
            Some((int_part, frac_part)) => {
                format!("{}.{}", self.grouping.group(int_part), frac_part)
            }
            None => self.grouping.group(fixed),
        }
    }
}

/// Compact count used in dataset tables: `450000` → `"450.0K"`.
/// Magnitudes below one thousand are printed as they are. The sign goes in
/// front (`-4500` → `"-4.5K"`); NaN and infinities are rejected.
pub fn format_count(value: f64) -> std::result::Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFinite(value));
    }
    let magnitude = value.abs();
    let body = if magnitude >= 1_000.0 {
        format!("{}K", fixed_digits(magnitude / 1_000.0, 1))
    } else {
        magnitude.to_string()
    };
    Ok(if value < 0.0 { format!("-{}", body) } else { body })
}

/// Renders a 0..1 ratio as a one-decimal percentage: `0.4` → `"40.0%"`.
pub fn format_ratio_percent(ratio: f64) -> String {
    format!("{}%", fixed_digits(ratio * 100.0, 1))
}
