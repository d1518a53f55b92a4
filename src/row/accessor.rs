//! Typed column accessors.
//!
//! Every accessor resolves three situations the same way: the column is not
//! part of the row, the column holds an explicit null, or the stored value's
//! text does not coerce to the target. Required accessors fall back to the
//! target's default, nullable accessors return `None`. Nothing here fails;
//! callers that need to tell the cases apart use [`Row::try_read`].
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use tracing::trace;
use uuid::Uuid;

use super::{Row, RowError};
use crate::types::{FromRawValue, RawValue};

const TIME_WIDTH: usize = 5; // HH:MM
const TIME_WIDTH_WITH_SECONDS: usize = 8; // HH:MM:SS

/// Fixed-width prefix of a time-of-day text.
///
/// Text shorter than the requested width is returned unmodified.
pub fn time_text(text: &str, include_seconds: bool) -> String {
    let width = if include_seconds { TIME_WIDTH_WITH_SECONDS } else { TIME_WIDTH };
    match text.char_indices().nth(width) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

impl Row {
    /// Nullable access for any [`FromRawValue`] target
    pub fn read_nullable<T: FromRawValue>(&self, column: &str) -> Option<T> {
        let raw = self.get(column)?;
        if raw.is_null() {
            return None;
        }

        let value = T::from_raw(raw);
        if value.is_none() {
            trace!(
                column,
                target = T::TARGET,
                kind = raw.kind_name(),
                "value did not coerce, treating as absent"
            );
        }
        value
    }

    /// Required access for any [`FromRawValue`] target
    pub fn read<T: FromRawValue>(&self, column: &str) -> T {
        self.read_nullable(column).unwrap_or_else(T::default_value)
    }

    /// Strict access: absent columns and malformed values are errors,
    /// an explicit null is `Ok(None)`.
    pub fn try_read<T: FromRawValue>(&self, column: &str) -> Result<Option<T>, RowError> {
        let raw = self
            .get(column)
            .ok_or_else(|| RowError::ColumnNotFound(column.to_string()))?;
        if raw.is_null() {
            return Ok(None);
        }

        T::from_raw(raw).map(Some).ok_or_else(|| RowError::Coercion {
            column: column.to_string(),
            target: T::TARGET,
            text: raw.to_text().unwrap_or_default(),
        })
    }

    pub fn read_string(&self, column: &str) -> String {
        self.read(column)
    }

    pub fn read_nullable_string(&self, column: &str) -> Option<String> {
        self.read_nullable(column)
    }

    pub fn read_int(&self, column: &str) -> i32 {
        self.read(column)
    }

    pub fn read_nullable_int(&self, column: &str) -> Option<i32> {
        self.read_nullable(column)
    }

    pub fn read_byte(&self, column: &str) -> u8 {
        self.read(column)
    }

    pub fn read_nullable_byte(&self, column: &str) -> Option<u8> {
        self.read_nullable(column)
    }

    pub fn read_double(&self, column: &str) -> f64 {
        self.read(column)
    }

    pub fn read_nullable_double(&self, column: &str) -> Option<f64> {
        self.read_nullable(column)
    }

    pub fn read_decimal(&self, column: &str) -> Decimal {
        self.read(column)
    }

    pub fn read_nullable_decimal(&self, column: &str) -> Option<Decimal> {
        self.read_nullable(column)
    }

    pub fn read_bool(&self, column: &str) -> bool {
        self.read(column)
    }

    pub fn read_nullable_bool(&self, column: &str) -> Option<bool> {
        self.read_nullable(column)
    }

    /// Falls back to `NaiveDateTime::MIN`
    pub fn read_datetime(&self, column: &str) -> NaiveDateTime {
        self.read(column)
    }

    pub fn read_nullable_datetime(&self, column: &str) -> Option<NaiveDateTime> {
        self.read_nullable(column)
    }

    /// Falls back to the nil UUID
    pub fn read_uuid(&self, column: &str) -> Uuid {
        self.read(column)
    }

    pub fn read_nullable_uuid(&self, column: &str) -> Option<Uuid> {
        self.read_nullable(column)
    }

    /// Time portion of a column as `HH:MM` or `HH:MM:SS`.
    ///
    /// Absent and null columns yield an empty string. Timestamps contribute
    /// their time of day; any other value is cut from its text form.
    pub fn read_time_text(&self, column: &str, include_seconds: bool) -> String {
        match self.get(column) {
            None | Some(RawValue::Null) => String::new(),
            Some(RawValue::Timestamp(ts)) => time_text(&ts.format("%H:%M:%S").to_string(), include_seconds),
            Some(raw) => raw
                .to_text()
                .map(|text| time_text(&text, include_seconds))
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_time_text_widths() {
        assert_eq!(time_text("13:45:30", true), "13:45:30");
        assert_eq!(time_text("13:45:30", false), "13:45");
        assert_eq!(time_text("13:45:30.0000000", true), "13:45:30");
    }

    #[test]
    fn test_time_text_short_input_unmodified() {
        assert_eq!(time_text("13:4", false), "13:4");
        assert_eq!(time_text("13:45", true), "13:45");
        assert_eq!(time_text("", true), "");
    }

    #[test]
    fn test_read_time_text_from_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(7, 5, 9).unwrap();
        let row = Row::new().with("at", ts);
        assert_eq!(row.read_time_text("at", true), "07:05:09");
        assert_eq!(row.read_time_text("at", false), "07:05");
    }

    #[test]
    fn test_read_time_text_absent_or_null() {
        let row = Row::new().with("t", RawValue::Null);
        assert_eq!(row.read_time_text("t", true), "");
        assert_eq!(row.read_time_text("missing", false), "");
    }

    #[test]
    fn test_generic_read_matches_named_accessor() {
        let row = Row::new().with("n", "17");
        assert_eq!(row.read::<i32>("n"), row.read_int("n"));
        assert_eq!(row.read_nullable::<u8>("n"), Some(17));
    }

    #[test]
    fn test_try_read_distinguishes_cases() {
        let row = Row::new().with("good", "5").with("bad", "five").with("empty", RawValue::Null);

        assert_eq!(row.try_read::<i32>("good"), Ok(Some(5)));
        assert_eq!(row.try_read::<i32>("empty"), Ok(None));
        assert_eq!(
            row.try_read::<i32>("missing"),
            Err(RowError::ColumnNotFound("missing".to_string()))
        );
        assert_eq!(
            row.try_read::<i32>("bad"),
            Err(RowError::Coercion {
                column: "bad".to_string(),
                target: "int",
                text: "five".to_string(),
            })
        );
    }
}
