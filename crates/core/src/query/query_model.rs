//! Filter predicates and sort specifications.

use serde::{Deserialize, Serialize};

use crate::constants::MATCH_ALL_SENTINEL;
use crate::records::{FieldRef, FieldValue, Record};

/// A row filter. Filters passed to a query are ANDed together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Predicate {
    /// Accepts every row without reading any field.
    MatchAll,
    /// Field equals the value. Text compares case-sensitively, numbers exactly.
    Equals { field: String, value: FieldValue },
    /// Field equals any of the values.
    OneOf { field: String, values: Vec<FieldValue> },
    /// Numeric field within the inclusive bounds. Missing bounds are open.
    Range {
        field: String,
        min: Option<f64>,
        max: Option<f64>,
    },
    /// Case-insensitive substring match on the field's text form.
    Contains { field: String, needle: String },
}

impl Predicate {
    pub fn equals(field: &str, value: impl Into<FieldValue>) -> Self {
        Predicate::Equals {
            field: field.to_string(),
            value: value.into(),
        }
    }

    /// Builds a predicate from a dropdown selection. The `"all"` selection
    /// becomes [`Predicate::MatchAll`].
    pub fn selection(field: &str, selected: &str) -> Self {
        if selected == MATCH_ALL_SENTINEL {
            Predicate::MatchAll
        } else {
            Predicate::equals(field, selected)
        }
    }

    pub fn one_of(field: &str, values: Vec<FieldValue>) -> Self {
        Predicate::OneOf {
            field: field.to_string(),
            values,
        }
    }

    pub fn range(field: &str, min: Option<f64>, max: Option<f64>) -> Self {
        Predicate::Range {
            field: field.to_string(),
            min,
            max,
        }
    }

    pub fn contains(field: &str, needle: &str) -> Self {
        Predicate::Contains {
            field: field.to_string(),
            needle: needle.to_string(),
        }
    }

    /// The field this predicate reads, `None` for match-all and for an
    /// equality against the `"all"` sentinel.
    pub fn field(&self) -> Option<&str> {
        if self.is_match_all() {
            return None;
        }
        match self {
            Predicate::MatchAll => None,
            Predicate::Equals { field, .. }
            | Predicate::OneOf { field, .. }
            | Predicate::Range { field, .. }
            | Predicate::Contains { field, .. } => Some(field),
        }
    }

    /// True when the predicate accepts everything without looking at a row.
    pub fn is_match_all(&self) -> bool {
        match self {
            Predicate::MatchAll => true,
            Predicate::Equals {
                value: FieldValue::Text(text),
                ..
            } => text == MATCH_ALL_SENTINEL,
            _ => false,
        }
    }

    /// Evaluates the predicate against one record. A record that lacks the
    /// field never matches.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        if self.is_match_all() {
            return true;
        }

        match self {
            Predicate::MatchAll => true,
            Predicate::Equals { field, value } => record
                .field(field)
                .is_some_and(|actual| value_equals(actual, value)),
            Predicate::OneOf { field, values } => record
                .field(field)
                .is_some_and(|actual| values.iter().any(|v| value_equals(actual, v))),
            Predicate::Range { field, min, max } => record
                .field(field)
                .and_then(|actual| actual.numeric())
                .is_some_and(|n| min.map_or(true, |lo| n >= lo) && max.map_or(true, |hi| n <= hi)),
            Predicate::Contains { field, needle } => record.field(field).is_some_and(|actual| {
                actual
                    .text_form()
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
            }),
        }
    }
}

fn value_equals(actual: FieldRef<'_>, expected: &FieldValue) -> bool {
    match (actual, expected) {
        (FieldRef::Number(a), FieldValue::Number(b)) => a == *b,
        (actual, FieldValue::Text(b)) => actual.text_form() == b.as_str(),
        (actual, FieldValue::Number(b)) => actual.numeric() == Some(*b),
    }
}

/// Sort direction. Missing and NaN keys go last in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

/// Single-key sort. The caller picks the direction; nothing here infers it
/// from the field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: &str, direction: SortDirection) -> Self {
        Self {
            key: key.to_string(),
            direction,
        }
    }

    /// Highest first. The usual choice for scores, revenue and ROI.
    pub fn descending(key: &str) -> Self {
        Self::new(key, SortDirection::Descending)
    }

    /// Lowest first. The usual choice for dates and names.
    pub fn ascending(key: &str) -> Self {
        Self::new(key, SortDirection::Ascending)
    }
}

/// A reusable filter + sort + limit query.
///
/// ```
/// use metricdeck_core::query::{Predicate, Query, SortSpec};
///
/// let top_regions = Query::new()
///     .filter(Predicate::range("roi", Some(10.0), None))
///     .sort_by(SortSpec::descending("roi"))
///     .limit(6);
/// assert_eq!(top_regions.filters().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    filters: Vec<Predicate>,
    sort: Option<SortSpec>,
    limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.filters.push(predicate);
        self
    }

    pub fn sort_by(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filters(&self) -> &[Predicate] {
        &self.filters
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn row_limit(&self) -> Option<usize> {
        self.limit
    }
}
