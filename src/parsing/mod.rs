//! parser for boundary condition strings

use tracing::debug;

use crate::language::{BoundaryTable, ParsingError, ParsingWarning};

pub mod reducer;
pub mod tokenizer;

pub use reducer::{reduce, reduce_with_skips, Skipped};
pub use tokenizer::{scan, tokenize, Lexeme};

/// A parsed table along with the fragments of input that were ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    pub table: BoundaryTable,
    pub warnings: Vec<ParsingWarning>,
}

/// Parse a boundary condition string into a table. Illegal characters are
/// fatal; unrecognized token sequences are dropped and reported as
/// warnings.
pub fn parse(content: &str) -> Result<Parsed, ParsingError> {
    let lexemes = match scan(content) {
        Ok(lexemes) => lexemes,
        Err(error) => {
            debug!(?error);
            return Err(error);
        }
    };

    let tokens: Vec<_> = lexemes
        .iter()
        .map(|lexeme| {
            lexeme
                .token
                .clone()
        })
        .collect();

    let (table, skipped) = reduce_with_skips(&tokens);

    let warnings: Vec<ParsingWarning> = skipped
        .into_iter()
        .map(|skip| ParsingWarning {
            offset: lexemes[skip.position].offset,
            token: skip.token,
        })
        .collect();

    debug!(
        "Found {} boundary condition{} from {} token{}",
        table.len(),
        if table.len() == 1 { "" } else { "s" },
        tokens.len(),
        if tokens.len() == 1 { "" } else { "s" }
    );
    if !warnings.is_empty() {
        debug!("skipped: {}", warnings.len());
    }

    Ok(Parsed { table, warnings })
}
