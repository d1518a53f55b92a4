use serde::Serialize;
use std::fmt;

/// Native parameter type tags understood by the query engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlType {
    Bit,
    SmallInt,
    Int,
    Decimal,
    Money,
    NVarChar,
    DateTime,
    Structured,
}

impl SqlType {
    pub fn name(&self) -> &'static str {
        match self {
            SqlType::Bit => "bit",
            SqlType::SmallInt => "smallint",
            SqlType::Int => "int",
            SqlType::Decimal => "decimal",
            SqlType::Money => "money",
            SqlType::NVarChar => "nvarchar",
            SqlType::DateTime => "datetime",
            SqlType::Structured => "structured",
        }
    }

    /// Case-insensitive lookup by type name, including common aliases
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "bit" | "bool" | "boolean" => Some(SqlType::Bit),
            "smallint" | "int2" => Some(SqlType::SmallInt),
            "int" | "integer" | "int4" => Some(SqlType::Int),
            "decimal" | "numeric" => Some(SqlType::Decimal),
            "money" => Some(SqlType::Money),
            "nvarchar" | "varchar" | "text" | "string" => Some(SqlType::NVarChar),
            "datetime" | "timestamp" => Some(SqlType::DateTime),
            "structured" | "table" => Some(SqlType::Structured),
            _ => None,
        }
    }

    /// Storage width in bytes for fixed-width types
    pub fn fixed_size(&self) -> Option<u32> {
        match self {
            SqlType::Bit => Some(1),
            SqlType::SmallInt => Some(2),
            SqlType::Int => Some(4),
            SqlType::Money | SqlType::DateTime => Some(8),
            SqlType::Decimal | SqlType::NVarChar | SqlType::Structured => None,
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
