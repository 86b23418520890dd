//! Array-mode construction: a bounded list of (name, group list) slots

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::language::{BoundaryGroup, BoundaryTable, ValidationError, VariableRef};
use crate::registry::NameToId;

/// One configured boundary condition slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Entry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group_list: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, group_list: impl Into<String>) -> Entry {
        Entry {
            name: name.into(),
            group_list: group_list.into(),
        }
    }
}

/// An entry after its group list has been split, before anything has been
/// looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requested<'a> {
    pub index: usize,
    pub name: &'a str,
    pub variables: Vec<&'a str>,
}

/// Split every entry's group list on runs of whitespace.
pub fn split(entries: &[Entry]) -> Vec<Requested<'_>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| Requested {
            index,
            name: entry
                .name
                .trim(),
            variables: entry
                .group_list
                .split_whitespace()
                .collect(),
        })
        .collect()
}

/// Look up every requested variable and assemble the table. Each entry is
/// judged on its own; problems are collected rather than stopping the
/// build.
pub fn resolve(
    requested: &[Requested<'_>],
    resolver: &impl NameToId,
) -> (BoundaryTable, Vec<ValidationError>) {
    let mut groups = Vec::new();
    let mut errors = Vec::new();

    for request in requested {
        let mut variables = Vec::with_capacity(
            request
                .variables
                .len(),
        );

        for name in &request.variables {
            let id = resolver.resolve(name);
            if id.is_none() {
                debug!("entry {}: cannot resolve {}", request.index, name);
                errors.push(ValidationError::UnknownVariable {
                    entry: request.index,
                    name: name.to_string(),
                });
            }
            variables.push(VariableRef::named(*name).with_id(id));
        }

        if variables.is_empty() {
            // an unused slot
            continue;
        }

        if request
            .name
            .is_empty()
        {
            errors.push(ValidationError::MissingName {
                entry: request.index,
            });
            continue;
        }

        groups.push(BoundaryGroup::with_variables(request.name, variables));
    }

    (BoundaryTable::from_groups(groups), errors)
}

/// Build a table from configured slots: split, then resolve.
pub fn build(
    entries: &[Entry],
    resolver: &impl NameToId,
) -> (BoundaryTable, Vec<ValidationError>) {
    let requested = split(entries);
    let (table, errors) = resolve(&requested, resolver);

    debug!(
        "Built {} boundary condition{} from {} entr{}, {} problem{}",
        table.len(),
        if table.len() == 1 { "" } else { "s" },
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" },
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    );

    (table, errors)
}
