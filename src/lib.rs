//! Parse boundary condition configurations into tables naming which grid
//! functions each boundary condition applies to.
//!
//! A configuration is either a string such as `"flat: aa::bb c::dd"`, or a
//! list of (name, group list) slots. Both produce the same
//! [`BoundaryTable`](language::BoundaryTable), which a [`Driver`](registry::Driver)
//! then walks to make one host call per variable.

pub mod config;
pub mod formatting;
pub mod language;
pub mod logging;
pub mod output;
pub mod parsing;
pub mod registry;
pub mod table;
