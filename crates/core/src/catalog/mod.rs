//! Metric catalog - section definitions and audience/priority views.
//!
//! The catalog is static data built once at startup. Views borrow from it and
//! never copy or mutate sections.

mod catalog_model;
mod catalog_service;
mod default_catalog;
mod presentation;

#[cfg(test)]
mod catalog_service_tests;

pub use catalog_model::{
    Audience, MetricEntry, MetricSection, PriorityFilter, PriorityTier, TieredView, Trend,
};
pub use catalog_service::{derive_view, tiered_view, validate_catalog};
pub use default_catalog::{default_catalog, default_presentation_hints};
pub use presentation::{
    decorate, DecoratedSection, PresentationHints, SectionLayout, SectionPresentation,
};
