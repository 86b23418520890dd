//! Two pass rendering of boundary tables

use crate::formatting::*;
use crate::language::*;

/// We do the formatting in two passes. First we convert the table into a
/// Vec of "fragments" (Syntax tag, String pairs). Then second we apply the
/// specified renderer to each pair to result in an embellished String.
pub fn render(renderer: &impl Render, table: &BoundaryTable) -> String {
    // Pass 1: Format table to tagged fragments
    let fragments = formatter::format_with_renderer(table);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    output
}
