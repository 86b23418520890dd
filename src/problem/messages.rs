use simplebcs::language::{ParsingError, ParsingWarning, Token, ValidationError};

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError) -> (String, String) {
    match error {
        ParsingError::IllegalCharacter(_, c) => (
            format!("Illegal character in input: '{}'", c),
            r#"
A boundary condition string may only contain identifiers made of letters,
digits, and underscores, the ':' that follows a boundary condition name,
and the '::' that separates a thorn from a variable. Spaces, tabs,
newlines, and commas may be used to separate them.
            "#
            .trim_ascii()
            .to_string(),
        ),
    }
}

/// Generate problem and detail messages for tokens that were skipped
pub fn generate_warning_message(warning: &ParsingWarning) -> (String, String) {
    match &warning.token {
        Token::Identifier(text) => (
            format!("Ignored '{}'", text),
            format!(
                "Expected either '{}:' to name a boundary condition or 'thorn::{}' to refer to a variable.",
                text, text
            ),
        ),
        Token::SingleColon => (
            "Ignored ':'".to_string(),
            "A ':' must directly follow the name of a boundary condition.".to_string(),
        ),
        Token::DoubleColon => (
            "Ignored '::'".to_string(),
            "A '::' must have a thorn name before it and a variable name after it.".to_string(),
        ),
        Token::ColonRun(n) => (
            format!("Ignored '{}'", ":".repeat(*n)),
            "Only ':' and '::' have meaning; longer runs of colons are not recognized.".to_string(),
        ),
    }
}

/// Generate problem and detail messages for malformed array entries
pub fn generate_validation_message(error: &ValidationError) -> (String, String) {
    match error {
        ValidationError::UnknownVariable { entry, name } => (
            format!("Unknown variable '{}' in bcs[{}]", name, entry),
            "No group with this name is known; check the spelling and the thorn name.".to_string(),
        ),
        ValidationError::MissingName { entry } => (
            format!("Missing name in bcs[{}]", entry),
            "Variables were listed but no boundary condition name was given, so the entry was ignored."
                .to_string(),
        ),
    }
}
