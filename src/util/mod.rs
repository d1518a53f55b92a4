//! Standalone date/time, text and random helpers used by the parameter
//! binders and the CLI.
pub mod datetime;
pub mod random;
pub mod text;

pub use random::RandomError;
