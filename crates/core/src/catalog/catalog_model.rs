//! Metric catalog models.

use serde::{Deserialize, Serialize};

use crate::aggregation::{classify_trend, percent_change};
use crate::constants::{EXECUTIVE_MAX_ORDER, OPERATIONAL_MAX_ORDER, PERCENTAGE_PRECISION};
use crate::currency::{CurrencyFormatter, FormatError, FormatOptions};
use crate::utils::decimal_utils::round_half_away;

/// Direction of a metric's change versus the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One tile of a metric section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricEntry {
    pub label: String,
    /// Pre-formatted display value ("₹8.7M", "3.6x", "Low")
    pub value: String,
    pub change_percent: f64,
    pub trend: Trend,
}

impl MetricEntry {
    pub fn new(label: &str, value: &str, change_percent: f64, trend: Trend) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            change_percent,
            trend,
        }
    }

    /// Builds an entry from live amounts instead of a static display string.
    ///
    /// The value is `current` rendered by `formatter`, the change is the
    /// percentage change from `previous` rounded to one decimal, and the trend
    /// is classified against `stable_band`.
    pub fn dynamic(
        label: &str,
        current: f64,
        previous: f64,
        formatter: &CurrencyFormatter,
        opts: &FormatOptions,
        stable_band: f64,
    ) -> Result<Self, FormatError> {
        let value = formatter.format(current, opts)?;
        let change = round_half_away(percent_change(current, previous), PERCENTAGE_PRECISION);
        Ok(Self {
            label: label.to_string(),
            value,
            change_percent: change,
            trend: classify_trend(change, stable_band),
        })
    }
}

/// Viewer segment a section is relevant to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    B2C,
    B2B,
}

impl Audience {
    pub const ALL: [Audience; 2] = [Audience::B2C, Audience::B2B];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::B2C => "B2C",
            Audience::B2B => "B2B",
        }
    }
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Priority band derived from a section's `order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    /// Orders 1-6
    Executive,
    /// Orders 7-9
    Operational,
    /// Orders 10 and above
    Analytical,
}

impl PriorityTier {
    pub fn from_order(order: u32) -> Self {
        if order <= EXECUTIVE_MAX_ORDER {
            PriorityTier::Executive
        } else if order <= OPERATIONAL_MAX_ORDER {
            PriorityTier::Operational
        } else {
            PriorityTier::Analytical
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTier::Executive => "executive",
            PriorityTier::Operational => "operational",
            PriorityTier::Analytical => "analytical",
        }
    }
}

/// Tier selection for [`derive_view`](super::derive_view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    Executive,
    Operational,
    Analytical,
    #[default]
    All,
}

impl PriorityFilter {
    /// True when a section with `order` passes this filter.
    pub fn admits(&self, order: u32) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Executive => PriorityTier::from_order(order) == PriorityTier::Executive,
            PriorityFilter::Operational => {
                PriorityTier::from_order(order) == PriorityTier::Operational
            }
            PriorityFilter::Analytical => {
                PriorityTier::from_order(order) == PriorityTier::Analytical
            }
        }
    }
}

impl From<PriorityTier> for PriorityFilter {
    fn from(tier: PriorityTier) -> Self {
        match tier {
            PriorityTier::Executive => PriorityFilter::Executive,
            PriorityTier::Operational => PriorityFilter::Operational,
            PriorityTier::Analytical => PriorityFilter::Analytical,
        }
    }
}

/// A titled group of metrics shown to one or both audiences.
///
/// Holds data only. Icons and layout live in
/// [`PresentationHints`](super::PresentationHints).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSection {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display position, starting at 1. Also encodes the priority tier.
    pub order: u32,
    pub audience_tags: Vec<Audience>,
    pub metrics: Vec<MetricEntry>,
}

impl MetricSection {
    pub fn new(id: &str, title: &str, description: &str, order: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            order,
            audience_tags: Vec::new(),
            metrics: Vec::new(),
        }
    }

    pub fn for_audiences(mut self, audiences: &[Audience]) -> Self {
        for audience in audiences {
            if !self.audience_tags.contains(audience) {
                self.audience_tags.push(*audience);
            }
        }
        self
    }

    pub fn with_metrics(mut self, metrics: Vec<MetricEntry>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn is_for(&self, audience: Audience) -> bool {
        self.audience_tags.contains(&audience)
    }

    pub fn tier(&self) -> PriorityTier {
        PriorityTier::from_order(self.order)
    }
}

/// A derived view grouped by priority tier, each group ascending by order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TieredView<'a> {
    pub executive: Vec<&'a MetricSection>,
    pub operational: Vec<&'a MetricSection>,
    pub analytical: Vec<&'a MetricSection>,
}

impl<'a> TieredView<'a> {
    pub fn tier(&self, tier: PriorityTier) -> &[&'a MetricSection] {
        match tier {
            PriorityTier::Executive => &self.executive,
            PriorityTier::Operational => &self.operational,
            PriorityTier::Analytical => &self.analytical,
        }
    }

    pub fn len(&self) -> usize {
        self.executive.len() + self.operational.len() + self.analytical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(PriorityTier::from_order(1), PriorityTier::Executive);
        assert_eq!(PriorityTier::from_order(6), PriorityTier::Executive);
        assert_eq!(PriorityTier::from_order(7), PriorityTier::Operational);
        assert_eq!(PriorityTier::from_order(9), PriorityTier::Operational);
        assert_eq!(PriorityTier::from_order(10), PriorityTier::Analytical);
        assert_eq!(PriorityTier::from_order(42), PriorityTier::Analytical);
    }

    #[test]
    fn test_priority_filter_admits() {
        assert!(PriorityFilter::All.admits(13));
        assert!(PriorityFilter::Executive.admits(3));
        assert!(!PriorityFilter::Executive.admits(7));
        assert!(PriorityFilter::Operational.admits(8));
        assert!(PriorityFilter::Analytical.admits(10));
        assert!(!PriorityFilter::Analytical.admits(9));
        assert_eq!(PriorityFilter::default(), PriorityFilter::All);
    }

    #[test]
    fn test_audience_serde_and_display() {
        assert_eq!(serde_json::to_string(&Audience::B2B).unwrap(), "\"b2b\"");
        let audience: Audience = serde_json::from_str("\"b2c\"").unwrap();
        assert_eq!(audience, Audience::B2C);
        assert_eq!(Audience::B2B.to_string(), "B2B");
    }

    #[test]
    fn test_section_builder_deduplicates_audiences() {
        let section = MetricSection::new("roi", "ROI", "Return on spend", 2)
            .for_audiences(&[Audience::B2C, Audience::B2C, Audience::B2B]);
        assert_eq!(section.audience_tags, vec![Audience::B2C, Audience::B2B]);
        assert!(section.is_for(Audience::B2B));
        assert_eq!(section.tier(), PriorityTier::Executive);
    }

    #[test]
    fn test_dynamic_metric_entry() {
        let formatter = CurrencyFormatter::default();
        let entry = MetricEntry::dynamic(
            "Total Revenue",
            8_700_000.0,
            7_354_184.0,
            &formatter,
            &FormatOptions::compact(),
            0.0,
        )
        .unwrap();

        assert_eq!(entry.value, "₹8.7M");
        assert_eq!(entry.change_percent, 18.3);
        assert_eq!(entry.trend, Trend::Up);
    }

    #[test]
    fn test_dynamic_metric_rejects_non_finite_amounts() {
        let formatter = CurrencyFormatter::default();
        let result = MetricEntry::dynamic(
            "Spend",
            f64::NAN,
            1.0,
            &formatter,
            &FormatOptions::default(),
            0.0,
        );
        assert!(matches!(result, Err(FormatError::NonFinite(_))));
    }

    #[test]
    fn test_metric_entry_serializes_camel_case() {
        let entry = MetricEntry::new("CPC", "₹2.69", -3.2, Trend::Down);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["changePercent"], -3.2);
        assert_eq!(json["trend"], "down");
    }
}
