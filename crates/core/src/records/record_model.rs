//! Generic record model shared by the query pipeline and the aggregator.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::DataError;

/// Date fields render and compare as ISO-8601 text.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// An owned field value. Enum-like fields are stored as their text form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_field_ref(&self) -> FieldRef<'_> {
        match self {
            FieldValue::Number(n) => FieldRef::Number(*n),
            FieldValue::Text(s) => FieldRef::Text(s),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// A borrowed view of one field of a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    Number(f64),
    Text(&'a str),
    Date(NaiveDate),
}

impl<'a> FieldRef<'a> {
    /// Numeric coercion used by range filters and aggregation.
    ///
    /// Numbers pass through, text is trimmed and parsed. NaN, infinities and
    /// unparseable text yield `None`.
    pub fn numeric(&self) -> Option<f64> {
        let value = match self {
            FieldRef::Number(n) => *n,
            FieldRef::Text(s) => s.trim().parse::<f64>().ok()?,
            FieldRef::Date(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Text form used for equality, substring search and lexicographic
    /// ordering. Dates become `YYYY-MM-DD`, so text order is date order.
    pub fn text_form(&self) -> Cow<'a, str> {
        match self {
            FieldRef::Number(n) => Cow::Owned(n.to_string()),
            FieldRef::Text(s) => Cow::Borrowed(*s),
            FieldRef::Date(d) => Cow::Owned(d.format(DATE_FORMAT).to_string()),
        }
    }

    pub fn to_owned_value(&self) -> FieldValue {
        match self {
            FieldRef::Number(n) => FieldValue::Number(*n),
            FieldRef::Text(s) => FieldValue::Text((*s).to_string()),
            FieldRef::Date(_) => FieldValue::Text(self.text_form().into_owned()),
        }
    }
}

impl fmt::Display for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Number(n) => write!(f, "{}", n),
            FieldRef::Text(s) => f.write_str(s),
            FieldRef::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
        }
    }
}

/// Anything the query pipeline and the aggregator can read fields from.
pub trait Record {
    /// Returns the named field, `None` when the record does not carry it.
    fn field(&self, key: &str) -> Option<FieldRef<'_>>;

    fn has_field(&self, key: &str) -> bool {
        self.field(key).is_some()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, key: &str) -> Option<FieldRef<'_>> {
        (**self).field(key)
    }
}

/// Fails with [`DataError::MissingField`] when `rows` is non-empty and no row
/// carries `field`. A field nobody carries is a caller mistake, not an empty
/// result.
pub fn require_field<R: Record>(rows: &[R], field: &str) -> Result<(), DataError> {
    if rows.is_empty() || rows.iter().any(|row| row.has_field(field)) {
        Ok(())
    } else {
        Err(DataError::missing_field(field))
    }
}

/// An open record of named fields, shaped like a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: BTreeMap<String, FieldValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<FieldValue>) {
        self.fields.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for Row {
    fn field(&self, key: &str) -> Option<FieldRef<'_>> {
        self.fields.get(key).map(FieldValue::as_field_ref)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
