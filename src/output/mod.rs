//! Human readable summaries of a boundary table

use serde::Serialize;
use tinytemplate::TinyTemplate;
use std::fmt::Write;
use tracing::debug;

use crate::language::BoundaryTable;
use crate::logging;

static SUMMARY: &str = "BCs to be applied by SimpleBCs:
{{ for group in groups }}vb[{ @index }]={ group }
{{ endfor }}";

#[derive(Serialize)]
struct Context {
    groups: Vec<String>,
}

/// List every boundary condition and the variables it applies to, one per
/// line, in table order.
pub fn summary(table: &BoundaryTable) -> String {
    let context = Context {
        groups: table
            .groups()
            .iter()
            .map(|group| group.to_string())
            .collect(),
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("summary", SUMMARY)
        .expect("Summary template is well formed");

    tt.render("summary", &context)
        .expect("Render summary template")
}

/// Log the summary of a table, but only when verbose output was requested.
/// Returns the text that was logged.
pub fn announce(table: &BoundaryTable, verbose: bool) -> Option<String> {
    if !verbose {
        debug!("Summary suppressed, {} groups", table.len());
        return None;
    }

    let text = summary(table);
    Some(logging::info(|report| write!(report, "{}", text)))
}
