//! Sort/filter pipeline for row-oriented datasets.
//!
//! Queries never mutate their input: they return a new vector of references
//! into the caller's rows, in filtered and sorted order.

mod query_model;
mod query_service;


pub use query_model::{Predicate, Query, SortDirection, SortSpec};
pub use query_service::{query, run_query};
