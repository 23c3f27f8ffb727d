//! Metricdeck Core - the data-transform layer of the metrics dashboard.
//!
//! This crate turns a static metric catalog and caller-supplied datasets into
//! display-ready values: audience/priority views of the catalog, filtered and
//! sorted row views, aggregate statistics, and currency strings. It performs
//! no I/O and renders nothing; the presentation layer consumes its outputs.

pub mod aggregation;
pub mod catalog;
pub mod constants;
pub mod currency;
pub mod dashboard;
pub mod errors;
pub mod query;
pub mod records;
pub mod settings;
pub mod utils;

pub use dashboard::Dashboard;
pub use settings::DashboardConfig;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
