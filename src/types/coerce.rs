//! Best-effort, locale-invariant coercion from a value's text form to a
//! target scalar. Every function returns `None` instead of failing.
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use crate::types::RawValue;

/// Timestamp layouts tried in order after RFC 3339
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f", // ISO with T
    "%Y-%m-%d %H:%M:%S%.f", // space separated
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn parse_int(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

pub fn parse_byte(text: &str) -> Option<u8> {
    text.trim().parse::<u8>().ok()
}

pub fn parse_double(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Accepts `true`/`false` in any letter case. Numeric forms are not booleans.
pub fn parse_bool(text: &str) -> Option<bool> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parse a timestamp. Offsets are normalized to UTC; a bare date means midnight.
pub fn parse_datetime(text: &str) -> Option<NaiveDateTime> {
    let trimmed = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for format in &TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Hyphenated, simple, braced and URN forms are all accepted.
pub fn parse_uuid(text: &str) -> Option<Uuid> {
    Uuid::parse_str(text.trim()).ok()
}

/// A scalar that can be extracted from a [`RawValue`].
///
/// `from_raw` must return `None` for `RawValue::Null` and for anything that
/// does not coerce; `default_value` is what required accessors fall back to.
pub trait FromRawValue: Sized {
    /// Target name used in logs and strict-accessor errors
    const TARGET: &'static str;

    fn default_value() -> Self;

    fn from_text(text: &str) -> Option<Self>;

    fn from_raw(raw: &RawValue) -> Option<Self> {
        raw.to_text().and_then(|text| Self::from_text(&text))
    }
}

impl FromRawValue for String {
    const TARGET: &'static str = "string";

    fn default_value() -> Self {
        String::new()
    }

    fn from_text(text: &str) -> Option<Self> {
        Some(text.to_string())
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Text(s) | RawValue::Time(s) => Some(s.clone()),
            other => other.to_text(),
        }
    }
}

impl FromRawValue for i32 {
    const TARGET: &'static str = "int";

    fn default_value() -> Self {
        0
    }

    fn from_text(text: &str) -> Option<Self> {
        parse_int(text)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Integer(i) => i32::try_from(*i).ok(),
            other => other.to_text().and_then(|text| parse_int(&text)),
        }
    }
}

impl FromRawValue for u8 {
    const TARGET: &'static str = "byte";

    fn default_value() -> Self {
        0
    }

    fn from_text(text: &str) -> Option<Self> {
        parse_byte(text)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Integer(i) => u8::try_from(*i).ok(),
            other => other.to_text().and_then(|text| parse_byte(&text)),
        }
    }
}

impl FromRawValue for f64 {
    const TARGET: &'static str = "double";

    fn default_value() -> Self {
        0.0
    }

    fn from_text(text: &str) -> Option<Self> {
        parse_double(text)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Float(f) => Some(*f),
            other => other.to_text().and_then(|text| parse_double(&text)),
        }
    }
}

impl FromRawValue for Decimal {
    const TARGET: &'static str = "decimal";

    fn default_value() -> Self {
        Decimal::ZERO
    }

    fn from_text(text: &str) -> Option<Self> {
        parse_decimal(text)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Decimal(d) => Some(*d),
            other => other.to_text().and_then(|text| parse_decimal(&text)),
        }
    }
}

impl FromRawValue for bool {
    const TARGET: &'static str = "bool";

    fn default_value() -> Self {
        false
    }

    fn from_text(text: &str) -> Option<Self> {
        parse_bool(text)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Boolean(b) => Some(*b),
            other => other.to_text().and_then(|text| parse_bool(&text)),
        }
    }
}

impl FromRawValue for NaiveDateTime {
    const TARGET: &'static str = "datetime";

    fn default_value() -> Self {
        NaiveDateTime::MIN
    }

    fn from_text(text: &str) -> Option<Self> {
        parse_datetime(text)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Timestamp(ts) => Some(*ts),
            other => other.to_text().and_then(|text| parse_datetime(&text)),
        }
    }
}

impl FromRawValue for Uuid {
    const TARGET: &'static str = "uuid";

    /// No value was ever established for an absent identifier; the nil UUID
    /// is the sentinel.
    fn default_value() -> Self {
        Uuid::nil()
    }

    fn from_text(text: &str) -> Option<Self> {
        parse_uuid(text)
    }

    fn from_raw(raw: &RawValue) -> Option<Self> {
        match raw {
            RawValue::Uuid(u) => Some(*u),
            other => other.to_text().and_then(|text| parse_uuid(&text)),
        }
    }
}
