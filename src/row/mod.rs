//! Result rows and typed column access.
pub mod accessor;
pub mod sqlite;

use thiserror::Error;

use crate::types::RawValue;

pub use accessor::time_text;

/// Errors reported only by the strict accessor, [`Row::try_read`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("column {column}: cannot convert {text:?} to {target}")]
    Coercion {
        column: String,
        target: &'static str,
        text: String,
    },
}

impl RowError {
    pub fn code(&self) -> &str {
        match self {
            RowError::ColumnNotFound(_) => "column_not_found",
            RowError::Coercion { .. } => "coercion_failed",
        }
    }
}

/// One result record: an ordered set of uniquely named columns.
///
/// Column names are case-sensitive. A lookup that returns `None` means the
/// column is not part of the row; `Some(RawValue::Null)` is an explicit null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, RawValue)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            columns: Vec::with_capacity(capacity),
        }
    }

    /// Append a column. A name already present has its value replaced in place.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        let name = name.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.columns.push((name, value)),
        }
    }

    /// Builder form of [`Row::push`]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(column, _)| column == name)
    }

    /// Raw lookup without coercion
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<N: Into<String>, V: Into<RawValue>> FromIterator<(N, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (name, value) in iter {
            row.push(name, value);
        }
        row
    }
}
