//! Code formatter for boundary condition strings

use crate::formatting::*;
use crate::language::*;

/// Lay a table out in canonical form, one boundary condition per line.
/// References belonging to a leading implicit group are written first
/// without a header so that reparsing the output gives back the same table.
pub fn format_with_renderer(table: &BoundaryTable) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    for (i, group) in table
        .groups()
        .iter()
        .enumerate()
    {
        if i == 0 && group.name() == IMPLICIT_GROUP {
            if !group.is_empty() {
                output.format_variables(group.variables());
                output.append(Syntax::Newline, "\n");
            }
            continue;
        }
        output.format_group(group);
    }

    output.fragments
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn format_group(&mut self, group: &BoundaryGroup) {
        self.append(Syntax::Name, group.name());
        self.append(Syntax::Colon, ":");

        if !group.is_empty() {
            self.append(Syntax::Neutral, " ");
            self.format_variables(group.variables());
        }

        self.append(Syntax::Newline, "\n");
    }

    fn format_variables(&mut self, variables: &[VariableRef]) {
        for (i, variable) in variables
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::Neutral, " ");
            }
            self.format_variable(variable);
        }
    }

    fn format_variable(&mut self, variable: &VariableRef) {
        match variable.thorn() {
            Some(thorn) => {
                self.append(Syntax::Thorn, thorn);
                self.append(Syntax::Scope, "::");
                self.append(Syntax::Variable, variable.local_name());
            }
            None => {
                self.append(Syntax::Variable, variable.full_name());
            }
        }
    }
}
