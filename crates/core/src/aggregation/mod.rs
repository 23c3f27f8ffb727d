//! Row aggregation - totals, averages, extremes and category breakdowns.
//!
//! Also hosts the change/trend helpers and the per-dataset summaries shown
//! in the header strip of each dashboard card.

mod aggregation_model;
mod aggregation_service;
pub mod summaries;
mod trend;


pub use aggregation_model::{AggregateResult, CategoryAggregate};
pub use aggregation_service::{aggregate, max_by_field, min_by_field};
pub use summaries::{
    funnel_conversion, summarize_accounts, summarize_alerts, summarize_lead_quality,
    AccountEngagementSummary, FunnelConversion, LeadQualityShare, LeadQualitySummary,
    RiskAlertSummary, StageConversion,
};
pub use trend::{classify_trend, percent_change};
