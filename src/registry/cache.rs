use std::sync::OnceLock;

use tracing::debug;

use crate::language::BoundaryTable;

/// Holds the table once it has been built so that repeated registration
/// passes reuse it. Building is race free: if two threads arrive at once
/// both may build but only one result is kept. Invalidating (on
/// reconfiguration) requires exclusive access.
#[derive(Debug, Default)]
pub struct TableCache {
    table: OnceLock<BoundaryTable>,
}

impl TableCache {
    pub fn new() -> TableCache {
        TableCache {
            table: OnceLock::new(),
        }
    }

    /// The cached table, if one has been built.
    pub fn get(&self) -> Option<&BoundaryTable> {
        self.table
            .get()
    }

    pub fn is_built(&self) -> bool {
        self.get()
            .is_some()
    }

    /// Return the cached table, building it first if necessary. A failed
    /// build leaves the cache empty so that the next call tries again.
    pub fn get_or_build<E, F>(&self, build: F) -> Result<&BoundaryTable, E>
    where
        F: FnOnce() -> Result<BoundaryTable, E>,
    {
        if let Some(table) = self
            .table
            .get()
        {
            return Ok(table);
        }

        debug!("Building boundary table");
        let table = build()?;

        Ok(self
            .table
            .get_or_init(|| table))
    }

    /// Discard the cached table.
    pub fn invalidate(&mut self) {
        if self
            .table
            .take()
            .is_some()
        {
            debug!("Discarded cached boundary table");
        }
    }
}
