// Value representations and coercions shared by rows, tables and parameters
pub mod raw_value;
pub mod coerce;
pub mod sql_type;

pub use raw_value::{RawValue, TIMESTAMP_TEXT_FORMAT};
pub use coerce::FromRawValue;
pub use sql_type::SqlType;
