//! Types representing a parsed boundary condition configuration

use std::fmt;

/// Name of the group which collects references appearing before any
/// explicit `name:` header.
pub const IMPLICIT_GROUP: &str = "none";

/// Lexical units of a boundary condition string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Identifier(String),
    SingleColon,
    DoubleColon,
    // three or more colons in a row; never matched by the grammar
    ColonRun(usize),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Identifier(text) => write!(f, "{}", text),
            Token::SingleColon => write!(f, ":"),
            Token::DoubleColon => write!(f, "::"),
            Token::ColonRun(n) => write!(f, "{}", ":".repeat(*n)),
        }
    }
}

/// Handle the host runtime uses for a variable group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub i32);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reference to a grid function. If the grid function is named
/// "MyThorn::a" then the full name is "MyThorn::a", the local name is "a",
/// and the thorn is "MyThorn". References taken from a group list keep only
/// the full name as written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableRef {
    thorn: Option<String>,
    name: String,
    full_name: String,
    id: Option<GroupId>,
}

impl VariableRef {
    pub fn qualified(thorn: impl Into<String>, name: impl Into<String>) -> VariableRef {
        let thorn = thorn.into();
        let name = name.into();
        let full_name = format!("{}::{}", thorn, name);

        VariableRef {
            thorn: Some(thorn),
            name,
            full_name,
            id: None,
        }
    }

    pub fn named(full_name: impl Into<String>) -> VariableRef {
        let full_name = full_name.into();

        VariableRef {
            thorn: None,
            name: full_name.clone(),
            full_name,
            id: None,
        }
    }

    pub fn with_id(mut self, id: Option<GroupId>) -> VariableRef {
        self.id = id;
        self
    }

    pub fn thorn(&self) -> Option<&str> {
        self.thorn
            .as_deref()
    }

    /// The local part of the name, or the whole name if the thorn was
    /// never split off.
    pub fn local_name(&self) -> &str {
        &self.name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn id(&self) -> Option<GroupId> {
        self.id
    }

    pub fn is_resolved(&self) -> bool {
        self.id
            .is_some()
    }
}

impl fmt::Display for VariableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

/// A named boundary condition and the grid functions it applies to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundaryGroup {
    name: String,
    variables: Vec<VariableRef>,
}

impl BoundaryGroup {
    pub fn new(name: impl Into<String>) -> BoundaryGroup {
        let name = name.into();
        let name = if name.is_empty() {
            "?".to_string()
        } else {
            name
        };

        BoundaryGroup {
            name,
            variables: Vec::new(),
        }
    }

    pub fn with_variables(name: impl Into<String>, variables: Vec<VariableRef>) -> BoundaryGroup {
        let mut group = BoundaryGroup::new(name);
        group.variables = variables;
        group
    }

    pub(crate) fn push(&mut self, variable: VariableRef) {
        self.variables
            .push(variable);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variables(&self) -> &[VariableRef] {
        &self.variables
    }

    pub fn is_empty(&self) -> bool {
        self.variables
            .is_empty()
    }
}

impl fmt::Display for BoundaryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BC(name={}", self.name)?;
        for variable in &self.variables {
            write!(f, ",{}", variable)?;
        }
        write!(f, ")")
    }
}

/// The result of parsing: boundary conditions in the order they were
/// declared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryTable {
    groups: Vec<BoundaryGroup>,
}

impl BoundaryTable {
    pub fn new() -> BoundaryTable {
        BoundaryTable { groups: Vec::new() }
    }

    pub fn from_groups(groups: Vec<BoundaryGroup>) -> BoundaryTable {
        BoundaryTable { groups }
    }

    pub(crate) fn open(&mut self, group: BoundaryGroup) {
        self.groups
            .push(group);
    }

    /// Append a reference to the most recently opened group.
    pub(crate) fn attach(&mut self, variable: VariableRef) {
        match self
            .groups
            .last_mut()
        {
            Some(group) => group.push(variable),
            None => {
                let mut group = BoundaryGroup::new(IMPLICIT_GROUP);
                group.push(variable);
                self.groups
                    .push(group);
            }
        }
    }

    pub fn groups(&self) -> &[BoundaryGroup] {
        &self.groups
    }

    pub fn get(&self, name: &str) -> Option<&BoundaryGroup> {
        self.groups
            .iter()
            .find(|group| group.name == name)
    }

    pub fn len(&self) -> usize {
        self.groups
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups
            .is_empty()
    }

    /// Every (group, variable) pair, in table order.
    pub fn references(&self) -> impl Iterator<Item = (&BoundaryGroup, &VariableRef)> {
        self.groups
            .iter()
            .flat_map(|group| {
                group
                    .variables
                    .iter()
                    .map(move |variable| (group, variable))
            })
    }
}

impl<'a> IntoIterator for &'a BoundaryTable {
    type Item = &'a BoundaryGroup;
    type IntoIter = std::slice::Iter<'a, BoundaryGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups
            .iter()
    }
}
