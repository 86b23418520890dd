//! Building a boundary table from whichever front end is configured

use tracing::debug;

use crate::language::{BoundaryTable, ParsingError, ParsingWarning, ValidationError};
use crate::parsing;
use crate::registry::NameToId;

mod builder;

pub use builder::{build, resolve, split, Entry, Requested};

/// Where the boundary conditions come from. Only one front end is active
/// at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    String(String),
    Array(Vec<Entry>),
}

/// A completed table along with every non-fatal problem found building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub table: BoundaryTable,
    pub warnings: Vec<ParsingWarning>,
    pub problems: Vec<ValidationError>,
}

impl Source {
    /// Construct the table. Only an illegal character in a boundary
    /// condition string is fatal.
    pub fn construct(&self, resolver: &impl NameToId) -> Result<Outcome, ParsingError> {
        match self {
            Source::String(content) => {
                debug!("Parsing bc_string {:?}", content);
                let parsed = parsing::parse(content)?;
                Ok(Outcome {
                    table: parsed.table,
                    warnings: parsed.warnings,
                    problems: vec![],
                })
            }
            Source::Array(entries) => {
                let (table, problems) = build(entries, resolver);
                Ok(Outcome {
                    table,
                    warnings: vec![],
                    problems,
                })
            }
        }
    }
}
