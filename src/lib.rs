pub mod types;
pub mod row;
pub mod param;
pub mod table;
pub mod util;
pub mod config;
pub mod cli;

pub use param::{BindError, Direction, ParamDescriptor, ParamSize, ParamValue, ParameterSet};
pub use row::{Row, RowError};
pub use table::{ColumnKind, Table, TableColumn, TableError, TableRecord};
pub use types::{FromRawValue, RawValue, SqlType};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowbindError {
    #[error("Row access error: {0}")]
    Row(#[from] RowError),

    #[error("Parameter error: {0}")]
    Bind(#[from] BindError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Random generation error: {0}")]
    Random(#[from] util::RandomError),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, RowbindError>;

impl RowbindError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &str {
        match self {
            RowbindError::Row(e) => e.code(),
            RowbindError::Bind(e) => e.code(),
            RowbindError::Table(e) => e.code(),
            RowbindError::Random(e) => e.code(),
            RowbindError::Sqlite(_) => "sqlite",
        }
    }
}
