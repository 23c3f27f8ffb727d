//! Dashboard configuration models.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STABLE_BAND;
use crate::currency::CurrencyConfig;
use crate::errors::{Error, Result};

/// Thresholds for classifying change percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendConfig {
    /// Changes within +/- this many percent are Stable (default: 0.0)
    pub stable_band: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            stable_band: DEFAULT_STABLE_BAND,
        }
    }
}

/// Process-wide dashboard configuration, fixed at construction.
///
/// Missing JSON fields fall back to their defaults, so `{}` is the INR
/// configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    pub currency: CurrencyConfig,
    pub trend: TrendConfig,
}

impl DashboardConfig {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)
            .map_err(|e| Error::InvalidConfig(format!("malformed dashboard config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.currency.validate()?;
        let band = self.trend.stable_band;
        if !band.is_finite() || band < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "stable band must be a finite, non-negative percentage, got {}",
                band
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.currency.code, "INR");
        assert_eq!(config.currency.symbol, "₹");
        assert_eq!(config.trend.stable_band, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());

        let config = DashboardConfig::from_json(r#"{ "trend": { "stableBand": 0.5 } }"#).unwrap();
        assert_eq!(config.trend.stable_band, 0.5);
        assert_eq!(config.currency.locale, "en-IN");
    }

    #[test]
    fn test_from_json_with_currency() {
        let config = DashboardConfig::from_json(
            r#"{
                "currency": { "code": "USD", "symbol": "$", "name": "US Dollar", "locale": "en-US" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.currency, CurrencyConfig::usd());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            DashboardConfig::from_json("not json"),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{ "trend": { "stableBand": -1 } }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{ "currency": { "code": "rupee" } }"#),
            Err(Error::InvalidConfig(_))
        ));
    }
}
