use owo_colors::OwoColorize;
use simplebcs::config::ConfigError;
use simplebcs::language::{ParsingError, ParsingWarning, RegistrationError, ValidationError};

use super::messages::{generate_error_message, generate_validation_message, generate_warning_message};

/// Format a parsing error with full details including the offending line
pub fn full_parsing_error(error: &ParsingError, source: &str) -> String {
    let (problem, details) = generate_error_message(error);
    with_context("error", &problem, &details, source, error.offset())
}

/// Format a skipped token with the offending line
pub fn full_parsing_warning(warning: &ParsingWarning, source: &str) -> String {
    let (problem, details) = generate_warning_message(warning);
    with_context("warning", &problem, &details, source, warning.offset)
}

pub fn concise_validation_error(error: &ValidationError) -> String {
    let (problem, details) = generate_validation_message(error);
    format!("{}: {}\n{}", "warning".yellow(), problem.bold(), details)
}

pub fn concise_registration_error(error: &RegistrationError) -> String {
    format!("{}: {}", "error".bright_red(), error)
}

pub fn concise_config_error(error: &ConfigError) -> String {
    format!("{}: {}", "error".bright_red(), error.bold())
}

fn with_context(label: &str, problem: &str, details: &str, source: &str, offset: usize) -> String {
    let i = calculate_line_number(source, offset);
    let j = calculate_column_number(source, offset);

    let code = source
        .lines()
        .nth(i)
        .unwrap_or("?");
    let line = i + 1;
    let column = j + 1;
    let width = 3.max(
        line.to_string()
            .len(),
    );

    let label = if label == "error" {
        label
            .bright_red()
            .to_string()
    } else {
        label
            .yellow()
            .to_string()
    };

    format!(
        r#"
{}: bc_string:{}:{} {}

{:width$} {}
{:width$} {} {}
{:width$} {} {:>column$}

{}
        "#,
        label,
        line,
        column,
        problem.bold(),
        ' ',
        '|'.bright_blue(),
        line.bright_blue(),
        '|'.bright_blue(),
        code,
        ' ',
        '|'.bright_blue(),
        '^'.bright_red(),
        details
    )
    .trim_ascii()
    .to_string()
}

// This returns a zero-origin result so that it can subsequently be used for
// splitting; for display to humans you'll have to add 1.
fn calculate_line_number(content: &str, offset: usize) -> usize {
    content[..offset]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
}

fn calculate_column_number(content: &str, offset: usize) -> usize {
    let before = &content[..offset];
    match before.rfind('\n') {
        Some(start) => content[start + 1..offset]
            .chars()
            .count(),
        None => before
            .chars()
            .count(),
    }
}
