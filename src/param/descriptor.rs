use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use crate::table::Table;
use crate::types::SqlType;

/// Parameter direction. This layer only produces inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Input,
}

/// Declared length of a parameter in bytes or characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamSize {
    Fixed(u32),
    /// Unbounded, e.g. `nvarchar(max)` or a table-valued parameter
    Max,
}

impl fmt::Display for ParamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamSize::Fixed(n) => write!(f, "{n}"),
            ParamSize::Max => f.write_str("max"),
        }
    }
}

/// Value carried by a parameter. `Null` is the explicit database null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ParamValue {
    Null,
    Text(String),
    SmallInt(i16),
    Int(i32),
    Bit(bool),
    Decimal(Decimal),
    DateTime(NaiveDateTime),
    Table(Table),
}

impl ParamValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }
}

/// Everything the query engine needs to bind one variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamDescriptor {
    /// Bind name, used verbatim
    pub name: String,
    pub sql_type: SqlType,
    pub direction: Direction,
    pub size: ParamSize,
    /// Only meaningful for `SqlType::Decimal`
    pub precision: u8,
    /// Only meaningful for `SqlType::Decimal`
    pub scale: u8,
    pub nullable: bool,
    pub value: ParamValue,
}

impl ParamDescriptor {
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

impl fmt::Display for ParamDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sql_type {
            SqlType::Decimal => write!(f, "{} {}({},{})", self.name, self.sql_type, self.precision, self.scale)?,
            SqlType::NVarChar => write!(f, "{} {}({})", self.name, self.sql_type, self.size)?,
            _ => write!(f, "{} {}", self.name, self.sql_type)?,
        }
        if self.nullable {
            f.write_str(" NULL")
        } else {
            f.write_str(" NOT NULL")
        }
    }
}
