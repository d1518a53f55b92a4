//! Outbound parameter descriptors for a query engine.
pub mod binder;
pub mod descriptor;
pub mod set;

pub use binder::{BindError, MAX_DECIMAL_PRECISION};
pub use descriptor::{Direction, ParamDescriptor, ParamSize, ParamValue};
pub use set::ParameterSet;
