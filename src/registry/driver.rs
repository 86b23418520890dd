use std::fmt::Write;

use tracing::debug;

use super::{BoundarySelector, GroupSync, NameToId};
use crate::language::{BoundaryTable, RegistrationError};
use crate::logging;

/// Which host operation a pass over the table performs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// select the boundary condition for each variable
    Local,
    /// synchronize the group of each variable
    Level,
}

/// Walks a table and makes one host call per (group, variable) pair. Every
/// pair is attempted; failures are gathered and returned together.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    verbose: bool,
}

impl Driver {
    pub fn new(verbose: bool) -> Driver {
        Driver { verbose }
    }

    /// Register every variable in the table with its boundary condition.
    /// Returns the number of successful selections.
    pub fn select_all(
        &self,
        table: &BoundaryTable,
        selector: &mut impl BoundarySelector,
    ) -> Result<usize, Vec<RegistrationError>> {
        let mut count = 0;
        let mut failures = Vec::new();

        for (group, variable) in table.references() {
            let bc = group.name();
            let name = variable.full_name();

            match selector.select(name, bc) {
                Ok(()) => count += 1,
                Err(source) => {
                    logging::warning(|report| {
                        write!(report, "select for bc: {} -> {} failed: {}", bc, name, source)
                    });
                    failures.push(RegistrationError::Select {
                        variable: name.to_string(),
                        bc: bc.to_string(),
                        source,
                    });
                }
            }

            if self.verbose {
                logging::info(|report| write!(report, "select for bc: {} -> {}", bc, name));
            }
        }

        finish(count, failures)
    }

    /// Synchronize the group of every variable in the table. Variables
    /// without an id are looked up by name first.
    pub fn sync_all(
        &self,
        table: &BoundaryTable,
        resolver: &impl NameToId,
        sync: &mut impl GroupSync,
    ) -> Result<usize, Vec<RegistrationError>> {
        let mut count = 0;
        let mut failures = Vec::new();

        for (_, variable) in table.references() {
            let name = variable.full_name();

            let group = match variable
                .id()
                .or_else(|| resolver.resolve(name))
            {
                Some(group) => group,
                None => {
                    logging::warning(|report| write!(report, "no group found for {}", name));
                    failures.push(RegistrationError::Unresolved {
                        variable: name.to_string(),
                    });
                    continue;
                }
            };

            match sync.sync(group) {
                Ok(()) => count += 1,
                Err(source) => {
                    logging::warning(|report| write!(report, "sync of {} failed: {}", name, source));
                    failures.push(RegistrationError::Sync {
                        variable: name.to_string(),
                        group,
                        source,
                    });
                }
            }

            if self.verbose {
                logging::info(|report| write!(report, "sync group: {} -> {}", group, name));
            }
        }

        finish(count, failures)
    }

    /// Perform whichever pass the phase calls for.
    pub fn run<H>(
        &self,
        phase: Phase,
        table: &BoundaryTable,
        resolver: &impl NameToId,
        host: &mut H,
    ) -> Result<usize, Vec<RegistrationError>>
    where
        H: BoundarySelector + GroupSync,
    {
        debug!("Running {:?} pass over {} groups", phase, table.len());
        match phase {
            Phase::Local => self.select_all(table, host),
            Phase::Level => self.sync_all(table, resolver, host),
        }
    }
}

fn finish(count: usize, failures: Vec<RegistrationError>) -> Result<usize, Vec<RegistrationError>> {
    if failures.is_empty() {
        Ok(count)
    } else {
        Err(failures)
    }
}
