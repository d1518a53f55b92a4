//! In-memory tables: the payload of structured parameters and the target of
//! list-to-table projection.
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use thiserror::Error;

use crate::row::Row;
use crate::types::RawValue;

/// Decimal cells are rounded to this many places during projection
const PROJECTED_DECIMAL_SCALE: u32 = 2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("row has {actual} values but the table has {expected} columns")]
    ArityMismatch { expected: usize, actual: usize },
}

impl TableError {
    pub fn code(&self) -> &str {
        match self {
            TableError::ArityMismatch { .. } => "arity_mismatch",
        }
    }
}

/// Declared kind of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Text,
    Integer,
    Float,
    Decimal,
    Boolean,
    Timestamp,
    Uuid,
    Time,
    Blob,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableColumn {
    pub name: String,
    pub kind: ColumnKind,
}

impl TableColumn {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A record type that can be projected into a [`Table`].
///
/// `values` must yield one value per entry of `columns`, in the same order.
pub trait TableRecord {
    fn columns() -> Vec<TableColumn>;

    fn values(&self) -> Vec<RawValue>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<TableColumn>,
    rows: Vec<Vec<RawValue>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Project records into a table. Decimal cells are rounded to two places.
    ///
    /// A record whose `values` length differs from `columns` fails the whole
    /// projection with [`TableError::ArityMismatch`].
    pub fn from_records<T: TableRecord>(records: &[T]) -> Result<Self, TableError> {
        let mut table = Table::new(T::columns());
        for record in records {
            let values = record
                .values()
                .into_iter()
                .map(|value| match value {
                    RawValue::Decimal(d) => RawValue::Decimal(round_projected(d)),
                    other => other,
                })
                .collect();
            table.add_row(values)?;
        }
        Ok(table)
    }

    pub fn add_row(&mut self, values: Vec<RawValue>) -> Result<(), TableError> {
        if values.len() != self.columns.len() {
            return Err(TableError::ArityMismatch {
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        self.rows.push(values);
        Ok(())
    }

    pub fn columns(&self) -> &[TableColumn] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Named view of one row, readable through the row accessors
    pub fn row(&self, index: usize) -> Option<Row> {
        self.rows.get(index).map(|values| self.named(values))
    }

    pub fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.rows.iter().map(|values| self.named(values))
    }

    fn named(&self, values: &[RawValue]) -> Row {
        self.columns
            .iter()
            .zip(values)
            .map(|(column, value)| (column.name.clone(), value.clone()))
            .collect()
    }
}

fn round_projected(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(PROJECTED_DECIMAL_SCALE, RoundingStrategy::MidpointNearestEven)
}
