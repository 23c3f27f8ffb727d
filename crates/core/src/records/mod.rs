//! Row-oriented dataset records.
//!
//! The query pipeline and the aggregator work on anything that implements
//! [`Record`]: the open [`Row`] map for ad-hoc data and the typed dataset
//! rows in [`datasets`].

pub mod datasets;
mod record_model;

#[cfg(test)]
mod record_model_tests;

pub use datasets::{
    Account, AccountStatus, AlertSeverity, AlertStatus, FunnelStage, LeadQualityBucket,
    RegionPerformance, RiskAlert,
};
pub use record_model::{require_field, FieldRef, FieldValue, Record, Row};
