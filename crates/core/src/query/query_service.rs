//! Query execution: ANDed filters, one stable sort key, optional limit.

use std::borrow::Cow;
use std::cmp::Ordering;

use log::debug;

use super::{Predicate, Query, SortDirection, SortSpec};
use crate::errors::Result;
use crate::records::{require_field, FieldRef, Record};

/// Filters `rows` with every predicate and sorts the survivors by `sort`.
///
/// Equal keys keep their input order. Text that parses as a number compares
/// as that number. Missing and NaN keys sort last in both directions.
pub fn query<'a, R: Record>(
    rows: &'a [R],
    filters: &[Predicate],
    sort: &SortSpec,
) -> Result<Vec<&'a R>> {
    let query = filters
        .iter()
        .cloned()
        .fold(Query::new().sort_by(sort.clone()), Query::filter);
    run_query(rows, &query)
}

/// Runs a prepared [`Query`] against `rows`.
pub fn run_query<'a, R: Record>(rows: &'a [R], query: &Query) -> Result<Vec<&'a R>> {
    for predicate in query.filters() {
        if let Some(field) = predicate.field() {
            require_field(rows, field)?;
        }
    }
    if let Some(sort) = query.sort() {
        require_field(rows, &sort.key)?;
    }

    let mut selected: Vec<&'a R> = rows
        .iter()
        .filter(|row| query.filters().iter().all(|p| p.matches(*row)))
        .collect();

    if let Some(sort) = query.sort() {
        selected = sort_rows(selected, sort);
    }

    if let Some(limit) = query.row_limit() {
        selected.truncate(limit);
    }

    debug!(
        "Query kept {} of {} rows (sort: {:?})",
        selected.len(),
        rows.len(),
        query.sort().map(|s| s.key.as_str())
    );
    Ok(selected)
}

enum SortKey<'a> {
    Number(f64),
    Text(Cow<'a, str>),
    Missing,
}

impl<'a> SortKey<'a> {
    fn of<R: Record>(record: &'a R, key: &str) -> Self {
        match record.field(key) {
            None => SortKey::Missing,
            Some(FieldRef::Number(n)) if n.is_nan() => SortKey::Missing,
            Some(FieldRef::Number(n)) => SortKey::Number(n),
            // Numeric text ("9", "100") sorts with the numbers.
            Some(FieldRef::Text(s)) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_nan() => SortKey::Missing,
                Ok(n) => SortKey::Number(n),
                Err(_) => SortKey::Text(Cow::Borrowed(s)),
            },
            Some(other) => SortKey::Text(other.text_form()),
        }
    }
}

fn sort_rows<'a, R: Record>(rows: Vec<&'a R>, sort: &SortSpec) -> Vec<&'a R> {
    let mut keyed: Vec<(SortKey<'a>, &'a R)> = rows
        .into_iter()
        .map(|row| (SortKey::of(row, &sort.key), row))
        .collect();

    // `sort_by` is stable, which keeps ties in input order.
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, sort.direction));
    keyed.into_iter().map(|(_, row)| row).collect()
}

fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>, direction: SortDirection) -> Ordering {
    let ordering = match (a, b) {
        (SortKey::Missing, SortKey::Missing) => return Ordering::Equal,
        (SortKey::Missing, _) => return Ordering::Greater,
        (_, SortKey::Missing) => return Ordering::Less,
        (SortKey::Number(x), SortKey::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
    };

    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
