//! Fold a token sequence into a table of boundary conditions

use crate::language::{BoundaryGroup, BoundaryTable, Token, VariableRef, IMPLICIT_GROUP};

/// A token the grammar did not recognize, by its position in the token
/// sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skipped {
    pub position: usize,
    pub token: Token,
}

/// Convert a list of tokens into a table of boundary conditions. `name:`
/// opens a new group and `thorn::var` adds a grid function to the most
/// recently opened one. Anything else is dropped.
pub fn reduce(tokens: &[Token]) -> BoundaryTable {
    let (table, _) = reduce_with_skips(tokens);
    table
}

/// As reduce(), also returning every token that was dropped.
pub fn reduce_with_skips(tokens: &[Token]) -> (BoundaryTable, Vec<Skipped>) {
    let mut table = BoundaryTable::new();
    let mut skipped = Vec::new();

    table.open(BoundaryGroup::new(IMPLICIT_GROUP));

    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i..] {
            [Token::Identifier(name), Token::SingleColon, ..] => {
                table.open(BoundaryGroup::new(name.as_str()));
                i += 2;
            }
            [Token::Identifier(thorn), Token::DoubleColon, Token::Identifier(name), ..] => {
                table.attach(VariableRef::qualified(thorn.as_str(), name.as_str()));
                i += 3;
            }
            [token, ..] => {
                skipped.push(Skipped {
                    position: i,
                    token: token.clone(),
                });
                i += 1;
            }
            [] => break,
        }
    }

    (table, skipped)
}
