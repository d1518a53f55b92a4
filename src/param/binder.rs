//! Parameter descriptor constructors, one per native type.
//!
//! Constructors only check the metadata the caller must supply (name, size,
//! precision, scale). Values are never checked against the declared size or
//! precision.
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use super::descriptor::{Direction, ParamDescriptor, ParamSize, ParamValue};
use crate::table::Table;
use crate::types::SqlType;
use crate::util::text::to_empty_when_null;

/// Largest precision a decimal parameter may declare
pub const MAX_DECIMAL_PRECISION: u8 = 38;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("parameter name must not be empty")]
    EmptyName,

    #[error("parameter {0}: a fixed-length text parameter needs a non-zero size")]
    MissingSize(String),

    #[error("parameter {name}: precision {precision} is outside 1..=38")]
    InvalidPrecision { name: String, precision: u8 },

    #[error("parameter {name}: scale {scale} exceeds precision {precision}")]
    ScaleExceedsPrecision { name: String, precision: u8, scale: u8 },

    #[error("parameter {0} is already bound")]
    DuplicateName(String),
}

impl BindError {
    pub fn code(&self) -> &str {
        match self {
            BindError::EmptyName => "empty_name",
            BindError::MissingSize(_) => "missing_size",
            BindError::InvalidPrecision { .. } => "invalid_precision",
            BindError::ScaleExceedsPrecision { .. } => "scale_exceeds_precision",
            BindError::DuplicateName(_) => "duplicate_name",
        }
    }
}

fn checked_name(name: &str) -> Result<String, BindError> {
    if name.trim().is_empty() {
        return Err(BindError::EmptyName);
    }
    Ok(name.to_string())
}

fn scalar(name: &str, sql_type: SqlType, size: ParamSize, nullable: bool, value: ParamValue) -> Result<ParamDescriptor, BindError> {
    let descriptor = ParamDescriptor {
        name: checked_name(name)?,
        sql_type,
        direction: Direction::Input,
        size,
        precision: 0,
        scale: 0,
        nullable,
        value,
    };
    debug!("Built parameter {}", descriptor);
    Ok(descriptor)
}

fn fixed(sql_type: SqlType) -> ParamSize {
    ParamSize::Fixed(sql_type.fixed_size().unwrap_or(0))
}

fn char_length(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}

impl ParamDescriptor {
    /// Text that may be null. Absent, empty and whitespace-only input all
    /// bind as an explicit null; otherwise the size is the character length.
    pub fn nullable_string(name: &str, value: Option<&str>) -> Result<Self, BindError> {
        match value {
            Some(text) if !text.trim().is_empty() => scalar(
                name,
                SqlType::NVarChar,
                ParamSize::Fixed(char_length(text)),
                true,
                ParamValue::Text(text.to_string()),
            ),
            _ => scalar(name, SqlType::NVarChar, ParamSize::Fixed(0), true, ParamValue::Null),
        }
    }

    /// Bounded text that is never null: absent or whitespace-only input binds
    /// as an empty string.
    pub fn nvarchar(name: &str, value: Option<&str>, size: u32) -> Result<Self, BindError> {
        if size == 0 {
            return Err(BindError::MissingSize(name.to_string()));
        }
        scalar(
            name,
            SqlType::NVarChar,
            ParamSize::Fixed(size),
            false,
            ParamValue::Text(to_empty_when_null(value).to_string()),
        )
    }

    /// Unbounded text that is never null, same normalization as [`Self::nvarchar`]
    pub fn nvarchar_max(name: &str, value: Option<&str>) -> Result<Self, BindError> {
        scalar(
            name,
            SqlType::NVarChar,
            ParamSize::Max,
            false,
            ParamValue::Text(to_empty_when_null(value).to_string()),
        )
    }

    pub fn nullable_datetime(name: &str, value: Option<NaiveDateTime>) -> Result<Self, BindError> {
        let value = value.map_or(ParamValue::Null, ParamValue::DateTime);
        scalar(name, SqlType::DateTime, fixed(SqlType::DateTime), true, value)
    }

    pub fn smallint(name: &str, value: i16) -> Result<Self, BindError> {
        scalar(name, SqlType::SmallInt, fixed(SqlType::SmallInt), false, ParamValue::SmallInt(value))
    }

    pub fn int(name: &str, value: i32) -> Result<Self, BindError> {
        scalar(name, SqlType::Int, fixed(SqlType::Int), false, ParamValue::Int(value))
    }

    pub fn nullable_int(name: &str, value: Option<i32>) -> Result<Self, BindError> {
        let value = value.map_or(ParamValue::Null, ParamValue::Int);
        scalar(name, SqlType::Int, fixed(SqlType::Int), true, value)
    }

    pub fn nullable_money(name: &str, value: Option<Decimal>) -> Result<Self, BindError> {
        let value = value.map_or(ParamValue::Null, ParamValue::Decimal);
        scalar(name, SqlType::Money, fixed(SqlType::Money), true, value)
    }

    /// Fixed-point decimal. The size is set to the precision.
    pub fn nullable_decimal(name: &str, value: Option<Decimal>, precision: u8, scale: u8) -> Result<Self, BindError> {
        if precision == 0 || precision > MAX_DECIMAL_PRECISION {
            return Err(BindError::InvalidPrecision {
                name: name.to_string(),
                precision,
            });
        }
        if scale > precision {
            return Err(BindError::ScaleExceedsPrecision {
                name: name.to_string(),
                precision,
                scale,
            });
        }

        let value = value.map_or(ParamValue::Null, ParamValue::Decimal);
        let mut descriptor = scalar(name, SqlType::Decimal, ParamSize::Fixed(precision as u32), true, value)?;
        descriptor.precision = precision;
        descriptor.scale = scale;
        Ok(descriptor)
    }

    pub fn bit(name: &str, value: bool) -> Result<Self, BindError> {
        scalar(name, SqlType::Bit, fixed(SqlType::Bit), false, ParamValue::Bit(value))
    }

    pub fn nullable_bit(name: &str, value: Option<bool>) -> Result<Self, BindError> {
        let value = value.map_or(ParamValue::Null, ParamValue::Bit);
        scalar(name, SqlType::Bit, fixed(SqlType::Bit), true, value)
    }

    /// Non-null bit that substitutes `default_if_null` for an absent value
    pub fn bit_with_default(name: &str, value: Option<bool>, default_if_null: bool) -> Result<Self, BindError> {
        Self::bit(name, value.unwrap_or(default_if_null))
    }

    /// Table-valued parameter with unbounded size
    pub fn table(name: &str, value: Table) -> Result<Self, BindError> {
        scalar(name, SqlType::Structured, ParamSize::Max, false, ParamValue::Table(value))
    }
}
