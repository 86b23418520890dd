//! Seams to the host runtime which owns the variables and applies the
//! boundary conditions.

use std::collections::{BTreeMap, HashMap};

use crate::language::{ExternalError, GroupId};

mod cache;
mod driver;

pub use cache::TableCache;
pub use driver::{Driver, Phase};

/// Look up the group a fully-qualified variable name belongs to.
pub trait NameToId {
    fn resolve(&self, full_name: &str) -> Option<GroupId>;
}

impl<F> NameToId for F
where
    F: Fn(&str) -> Option<GroupId>,
{
    fn resolve(&self, full_name: &str) -> Option<GroupId> {
        self(full_name)
    }
}

impl NameToId for HashMap<String, GroupId> {
    fn resolve(&self, full_name: &str) -> Option<GroupId> {
        self.get(full_name)
            .copied()
    }
}

impl NameToId for BTreeMap<String, GroupId> {
    fn resolve(&self, full_name: &str) -> Option<GroupId> {
        self.get(full_name)
            .copied()
    }
}

/// Ask the host to apply boundary condition `bc_name` to a variable.
pub trait BoundarySelector {
    fn select(&mut self, variable: &str, bc_name: &str) -> Result<(), ExternalError>;
}

/// Ask the host to synchronize a group.
pub trait GroupSync {
    fn sync(&mut self, group: GroupId) -> Result<(), ExternalError>;
}

/// A call made against a Recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Select { variable: String, bc: String },
    Sync { group: GroupId },
}

/// Stand-in host which records every call it receives, failing those whose
/// variable (or group) has been marked as broken.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    failing_variables: Vec<String>,
    failing_groups: Vec<GroupId>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    pub fn fail_variable(mut self, variable: impl Into<String>) -> Recorder {
        self.failing_variables
            .push(variable.into());
        self
    }

    pub fn fail_group(mut self, group: GroupId) -> Recorder {
        self.failing_groups
            .push(group);
        self
    }
}

impl BoundarySelector for Recorder {
    fn select(&mut self, variable: &str, bc_name: &str) -> Result<(), ExternalError> {
        self.calls
            .push(Call::Select {
                variable: variable.to_string(),
                bc: bc_name.to_string(),
            });

        if self
            .failing_variables
            .iter()
            .any(|v| v == variable)
        {
            return Err(ExternalError::new(-1, "selection refused"));
        }
        Ok(())
    }
}

impl GroupSync for Recorder {
    fn sync(&mut self, group: GroupId) -> Result<(), ExternalError> {
        self.calls
            .push(Call::Sync { group });

        if self
            .failing_groups
            .contains(&group)
        {
            return Err(ExternalError::new(-1, "synchronization refused"));
        }
        Ok(())
    }
}
