use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Canonical text layout for timestamps. `%.f` omits the fraction when it is zero.
pub const TIMESTAMP_TEXT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A loosely-typed column value as produced by a result set.
///
/// `Null` is the explicit-null marker: the column exists but holds nothing.
/// An absent column is represented by the row lookup returning `None`, never
/// by a variant here.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RawValue {
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
    Boolean(bool),
    Timestamp(NaiveDateTime),
    Uuid(Uuid),
    /// Raw text holding a time of day, e.g. `13:45:30.0000000`
    Time(String),
    Blob(Vec<u8>),
}

impl RawValue {
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// External text representation used by every coercion.
    ///
    /// Returns `None` for `Null`. Numbers use locale-invariant formatting,
    /// blobs are rendered as lowercase hex.
    pub fn to_text(&self) -> Option<String> {
        match self {
            RawValue::Null => None,
            RawValue::Text(s) | RawValue::Time(s) => Some(s.clone()),
            RawValue::Integer(i) => Some(i.to_string()),
            RawValue::Float(f) => Some(f.to_string()),
            RawValue::Decimal(d) => Some(d.to_string()),
            RawValue::Boolean(b) => Some(b.to_string()),
            RawValue::Timestamp(ts) => Some(ts.format(TIMESTAMP_TEXT_FORMAT).to_string()),
            RawValue::Uuid(u) => Some(u.hyphenated().to_string()),
            RawValue::Blob(bytes) => Some(hex::encode(bytes)),
        }
    }

    /// Short name of the storage kind, used in logs and error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Text(_) => "text",
            RawValue::Integer(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::Decimal(_) => "decimal",
            RawValue::Boolean(_) => "boolean",
            RawValue::Timestamp(_) => "timestamp",
            RawValue::Uuid(_) => "uuid",
            RawValue::Time(_) => "time",
            RawValue::Blob(_) => "blob",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_text() {
            Some(text) => f.write_str(&text),
            None => f.write_str("NULL"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Integer(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Integer(value as i64)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<Decimal> for RawValue {
    fn from(value: Decimal) -> Self {
        RawValue::Decimal(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Boolean(value)
    }
}

impl From<NaiveDateTime> for RawValue {
    fn from(value: NaiveDateTime) -> Self {
        RawValue::Timestamp(value)
    }
}

impl From<Uuid> for RawValue {
    fn from(value: Uuid) -> Self {
        RawValue::Uuid(value)
    }
}

impl From<Vec<u8>> for RawValue {
    fn from(value: Vec<u8>) -> Self {
        RawValue::Blob(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawValue::Null)
    }
}
