use rusqlite::types::ValueRef;
use tracing::debug;
use uuid::Uuid;

use super::Row;
use crate::types::RawValue;
use crate::types::coerce::{parse_bool, parse_datetime, parse_decimal, parse_uuid};

/// What a declared column type says about how to read the stored value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeclaredKind {
    Boolean,
    Uuid,
    Timestamp,
    Time,
    Decimal,
    Storage,
}

fn declared_kind(decl_type: Option<&str>) -> DeclaredKind {
    let Some(decl) = decl_type else {
        return DeclaredKind::Storage;
    };
    let type_upper = decl.to_uppercase();

    if type_upper.contains("BOOL") {
        return DeclaredKind::Boolean;
    }

    if type_upper.contains("UUID") || type_upper.contains("GUID") {
        return DeclaredKind::Uuid;
    }

    // DATETIME and TIMESTAMP must win over the bare TIME check
    if type_upper.contains("DATETIME") || type_upper.contains("TIMESTAMP") || type_upper == "DATE" {
        return DeclaredKind::Timestamp;
    }

    if type_upper.starts_with("TIME") {
        return DeclaredKind::Time;
    }

    if type_upper.contains("DECIMAL") || type_upper.contains("NUMERIC") || type_upper.contains("MONEY") {
        return DeclaredKind::Decimal;
    }

    DeclaredKind::Storage
}

/// Plain storage-class mapping, no declared type involved
fn storage_value(value: ValueRef<'_>) -> RawValue {
    match value {
        ValueRef::Null => RawValue::Null,
        ValueRef::Integer(i) => RawValue::Integer(i),
        ValueRef::Real(f) => RawValue::Float(f),
        ValueRef::Text(bytes) => RawValue::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => RawValue::Blob(bytes.to_vec()),
    }
}

/// Refine a storage value using the declared column type.
///
/// When the refinement does not parse, the storage value is kept and the
/// accessors see the original data.
fn refine(kind: DeclaredKind, value: ValueRef<'_>) -> RawValue {
    let storage = storage_value(value);
    let refined = match (kind, &storage) {
        (_, RawValue::Null) | (DeclaredKind::Storage, _) => None,
        (DeclaredKind::Boolean, RawValue::Integer(i)) => Some(RawValue::Boolean(*i != 0)),
        (DeclaredKind::Boolean, RawValue::Text(t)) => parse_bool(t).map(RawValue::Boolean),
        (DeclaredKind::Uuid, RawValue::Text(t)) => parse_uuid(t).map(RawValue::Uuid),
        (DeclaredKind::Uuid, RawValue::Blob(bytes)) => Uuid::from_slice(bytes).ok().map(RawValue::Uuid),
        (DeclaredKind::Timestamp, RawValue::Text(t)) => parse_datetime(t).map(RawValue::Timestamp),
        (DeclaredKind::Time, RawValue::Text(t)) => Some(RawValue::Time(t.clone())),
        (DeclaredKind::Decimal, other) => other
            .to_text()
            .and_then(|text| parse_decimal(&text))
            .map(RawValue::Decimal),
        _ => None,
    };
    refined.unwrap_or(storage)
}

impl Row {
    /// Snapshot a SQLite result row, keyed by the statement's column names.
    ///
    /// When several result columns share a name (`SELECT a.id, b.id`), the
    /// first one is kept and later ones are skipped.
    pub fn from_sqlite(sqlite_row: &rusqlite::Row<'_>) -> rusqlite::Result<Row> {
        let columns = sqlite_row.as_ref().columns();
        let mut row = Row::with_capacity(columns.len());

        for (index, column) in columns.iter().enumerate() {
            if row.contains_column(column.name()) {
                debug!("Skipping duplicate result column '{}' at index {}", column.name(), index);
                continue;
            }
            let kind = declared_kind(column.decl_type());
            let value = refine(kind, sqlite_row.get_ref(index)?);
            row.push(column.name(), value);
        }

        debug!("Adapted SQLite row with {} columns", row.len());
        Ok(row)
    }
}
