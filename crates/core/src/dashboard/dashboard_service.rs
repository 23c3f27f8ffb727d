use log::debug;

use crate::aggregation::classify_trend;
use crate::catalog::{
    decorate, default_catalog, default_presentation_hints, derive_view, tiered_view,
    validate_catalog, Audience, DecoratedSection, MetricEntry, MetricSection, PresentationHints,
    PriorityFilter, TieredView, Trend,
};
use crate::currency::{CurrencyFormatter, FormatOptions};
use crate::errors::Result;
use crate::settings::DashboardConfig;

/// Read-only dashboard context.
///
/// Configuration and catalog are validated once in [`Dashboard::new`]. After
/// that nothing mutates, so one instance can serve every request.
#[derive(Debug, Clone)]
pub struct Dashboard {
    config: DashboardConfig,
    formatter: CurrencyFormatter,
    catalog: Vec<MetricSection>,
    hints: PresentationHints,
}

impl Dashboard {
    pub fn new(config: DashboardConfig, catalog: Vec<MetricSection>) -> Result<Self> {
        config.validate()?;
        validate_catalog(&catalog)?;
        let formatter = CurrencyFormatter::new(config.currency.clone())?;

        debug!(
            "Dashboard ready: {} sections, currency {}",
            catalog.len(),
            config.currency.code
        );
        Ok(Self {
            config,
            formatter,
            catalog,
            hints: PresentationHints::new(),
        })
    }

    /// The built-in catalog and its presentation hints under `config`.
    pub fn builtin(config: DashboardConfig) -> Result<Self> {
        let dashboard = Self::new(config, default_catalog())?;
        Ok(dashboard.with_presentation_hints(default_presentation_hints()))
    }

    pub fn with_presentation_hints(mut self, hints: PresentationHints) -> Self {
        self.hints = hints;
        self
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }

    pub fn catalog(&self) -> &[MetricSection] {
        &self.catalog
    }

    pub fn presentation_hints(&self) -> &PresentationHints {
        &self.hints
    }

    pub fn view(
        &self,
        audience: Audience,
        priority: PriorityFilter,
    ) -> Result<Vec<&MetricSection>> {
        Ok(derive_view(&self.catalog, audience, priority)?)
    }

    pub fn tiered_view(&self, audience: Audience) -> Result<TieredView<'_>> {
        Ok(tiered_view(&self.catalog, audience)?)
    }

    /// [`Dashboard::view`] with each section's presentation hints attached.
    pub fn decorated_view(
        &self,
        audience: Audience,
        priority: PriorityFilter,
    ) -> Result<Vec<DecoratedSection<'_>>> {
        let view = self.view(audience, priority)?;
        Ok(decorate(&view, &self.hints))
    }

    pub fn format_amount(&self, amount: f64, opts: &FormatOptions) -> Result<String> {
        Ok(self.formatter.format(amount, opts)?)
    }

    /// Re-renders a display string in the configured currency, returning it
    /// unchanged when it holds no number.
    pub fn format_magnitude(&self, raw: &str, opts: &FormatOptions) -> String {
        self.formatter.format_magnitude_str(raw, opts)
    }

    /// Builds a metric tile from live amounts using the configured currency
    /// and stable band.
    pub fn dynamic_metric(
        &self,
        label: &str,
        current: f64,
        previous: f64,
        opts: &FormatOptions,
    ) -> Result<MetricEntry> {
        Ok(MetricEntry::dynamic(
            label,
            current,
            previous,
            &self.formatter,
            opts,
            self.config.trend.stable_band,
        )?)
    }

    /// Classifies a change percentage against the configured stable band.
    pub fn classify_change(&self, change: f64) -> Trend {
        classify_trend(change, self.config.trend.stable_band)
    }
}
