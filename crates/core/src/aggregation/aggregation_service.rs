//! Aggregation over row sequences.

use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;

use super::{AggregateResult, CategoryAggregate};
use crate::constants::PERCENTAGE_PRECISION;
use crate::errors::Result;
use crate::records::{require_field, Record};
use crate::utils::decimal_utils::round_half_away;

/// Aggregates `field` over `rows`, optionally partitioned by `category_field`.
///
/// Rows where `field` is absent are skipped entirely. Rows where it is present
/// but not numeric are counted and left out of sum, mean and extremes. When a
/// category field is given, rows that lack it are left out of every
/// partition.
pub fn aggregate<R: Record>(
    rows: &[R],
    field: &str,
    category_field: Option<&str>,
) -> Result<AggregateResult> {
    require_field(rows, field)?;
    if let Some(category) = category_field {
        require_field(rows, category)?;
    }

    let mut result = AggregateResult::default();
    let mut numeric_count = 0usize;
    let mut index_by_key: HashMap<String, usize> = HashMap::new();
    let mut covers_all = true;

    for row in rows {
        let Some(value) = row.field(field) else {
            continue;
        };
        result.count += 1;

        let numeric = value.numeric();
        if let Some(n) = numeric {
            numeric_count += 1;
            result.sum += n;
            result.min = Some(result.min.map_or(n, |m| m.min(n)));
            result.max = Some(result.max.map_or(n, |m| m.max(n)));
        }

        let Some(category) = category_field else {
            continue;
        };
        let Some(key) = row.field(category) else {
            if numeric.is_some() {
                covers_all = false;
            }
            continue;
        };

        let key = key.text_form().into_owned();
        let idx = match index_by_key.get(&key) {
            Some(&idx) => idx,
            None => {
                result.by_category.push(CategoryAggregate {
                    key: key.clone(),
                    count: 0,
                    sum: 0.0,
                    percentage_of_total: 0.0,
                });
                index_by_key.insert(key, result.by_category.len() - 1);
                result.by_category.len() - 1
            }
        };

        let partition = &mut result.by_category[idx];
        partition.count += 1;
        if let Some(n) = numeric {
            partition.sum += n;
        }
    }

    if numeric_count > 0 {
        result.mean = result.sum / numeric_count as f64;
    }
    assign_percentages(&mut result.by_category, result.sum, covers_all);

    debug!(
        "Aggregated '{}' over {} rows: count={}, numeric={}, categories={}",
        field,
        rows.len(),
        result.count,
        numeric_count,
        result.by_category.len()
    );
    Ok(result)
}

/// Returns the row with the smallest numeric `field`. The first row wins ties.
pub fn min_by_field<'a, R: Record>(rows: &'a [R], field: &str) -> Result<Option<&'a R>> {
    extreme_by_field(rows, field, Ordering::Less)
}

/// Returns the row with the largest numeric `field`. The first row wins ties.
pub fn max_by_field<'a, R: Record>(rows: &'a [R], field: &str) -> Result<Option<&'a R>> {
    extreme_by_field(rows, field, Ordering::Greater)
}

fn extreme_by_field<'a, R: Record>(
    rows: &'a [R],
    field: &str,
    wanted: Ordering,
) -> Result<Option<&'a R>> {
    require_field(rows, field)?;

    let mut best: Option<(f64, &'a R)> = None;
    for row in rows {
        let Some(value) = row.field(field).and_then(|f| f.numeric()) else {
            continue;
        };
        let replace = match best {
            Some((current, _)) => value.partial_cmp(&current) == Some(wanted),
            None => true,
        };
        if replace {
            best = Some((value, row));
        }
    }
    Ok(best.map(|(_, row)| row))
}

/// Fills `percentage_of_total` for every partition.
///
/// Shares are rounded half away from zero to [`PERCENTAGE_PRECISION`]
/// decimals, in integer steps. When the partitions cover every numeric row
/// and the rounded shares drift more than one step from 100, the partitions
/// whose rounding moved them furthest from their exact share are nudged one
/// step at a time until the total is back within bounds.
fn assign_percentages(partitions: &mut [CategoryAggregate], total: f64, covers_all: bool) {
    if partitions.is_empty() || total == 0.0 || !total.is_finite() {
        return;
    }

    let scale = 10_i64.pow(PERCENTAGE_PRECISION);
    let exact: Vec<f64> = partitions
        .iter()
        .map(|p| p.sum / total * 100.0 * scale as f64)
        .collect();
    let mut steps: Vec<i64> = partitions
        .iter()
        .map(|p| {
            let share = round_half_away(p.sum / total * 100.0, PERCENTAGE_PRECISION);
            (share * scale as f64).round() as i64
        })
        .collect();

    if covers_all {
        let rounded_total = steps.iter().fold(0_i64, |acc, s| acc.saturating_add(*s));
        let mut drift = (100 * scale).saturating_sub(rounded_total);

        // Exact shares sum to 100, so honest rounding drifts at most half a
        // step per partition.
        if drift.abs() <= steps.len() as i64 {
            while drift.abs() > 1 {
                let step = drift.signum();
                let furthest = (0..steps.len()).max_by(|&a, &b| {
                    let gap_a = (exact[a] - steps[a] as f64) * step as f64;
                    let gap_b = (exact[b] - steps[b] as f64) * step as f64;
                    gap_a.partial_cmp(&gap_b).unwrap_or(Ordering::Equal)
                });
                let Some(idx) = furthest else {
                    break;
                };
                steps[idx] += step;
                drift -= step;
            }
        }
    }

    for (partition, step) in partitions.iter_mut().zip(steps) {
        partition.percentage_of_total = step as f64 / scale as f64;
    }
}
