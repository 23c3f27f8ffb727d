//! Aggregation result models.

use serde::{Deserialize, Serialize};

/// Totals for one category partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAggregate {
    /// Display value of the category field
    pub key: String,
    /// Rows in the partition that carry the aggregated field
    pub count: usize,
    /// Sum of the partition's numeric values
    pub sum: f64,
    /// Share of the overall sum (0-100, one decimal)
    pub percentage_of_total: f64,
}

/// Summary of one numeric field over a row sequence.
///
/// Derived on demand and never cached.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    /// Rows where the field is present, numeric or not
    pub count: usize,
    pub sum: f64,
    /// Mean of the numeric values, 0 when there are none
    pub mean: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Category partitions in order of first occurrence
    pub by_category: Vec<CategoryAggregate>,
}

impl AggregateResult {
    /// Looks up a category partition by key.
    pub fn category(&self, key: &str) -> Option<&CategoryAggregate> {
        self.by_category.iter().find(|c| c.key == key)
    }
}
