//! Break a boundary condition string into tokens

use crate::language::{ParsingError, Token};

/// A token along with the byte offset where it started.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub offset: usize,
    pub token: Token,
}

/// Characters which may appear in an identifier.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters which separate tokens and are otherwise ignored.
pub fn is_separator(c: char) -> bool {
    matches!(c, ',' | ' ' | '\t' | '\r' | '\n')
}

/// Break a string into tokens that are either a C identifier, a single
/// colon, or a double colon. Commas and whitespace are skipped.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParsingError> {
    let lexemes = scan(input)?;

    Ok(lexemes
        .into_iter()
        .map(|lexeme| lexeme.token)
        .collect())
}

/// As tokenize(), but retaining where in the input each token began.
pub fn scan(input: &str) -> Result<Vec<Lexeme>, ParsingError> {
    let mut lexemes = Vec::new();
    let mut buf = String::new();
    let mut start = 0;

    // the previous character, including separators
    let mut last = '\0';

    for (i, c) in input.char_indices() {
        if c == ':' && last == ':' {
            buf.push(c);
        } else if is_identifier_char(c) && is_identifier_char(last) {
            buf.push(c);
        } else if c == ':' || is_identifier_char(c) {
            flush(&mut lexemes, &mut buf, start);
            buf.push(c);
            start = i;
        } else if is_separator(c) {
            // ignore
        } else {
            return Err(ParsingError::IllegalCharacter(i, c));
        }
        last = c;
    }

    flush(&mut lexemes, &mut buf, start);

    Ok(lexemes)
}

fn flush(lexemes: &mut Vec<Lexeme>, buf: &mut String, offset: usize) {
    if buf.is_empty() {
        return;
    }

    let token = classify(buf);
    lexemes.push(Lexeme { offset, token });
    buf.clear();
}

fn classify(buf: &str) -> Token {
    match buf {
        ":" => Token::SingleColon,
        "::" => Token::DoubleColon,
        _ if buf
            .bytes()
            .all(|b| b == b':') =>
        {
            Token::ColonRun(buf.len())
        }
        _ => Token::Identifier(buf.to_string()),
    }
}
