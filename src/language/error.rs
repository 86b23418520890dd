use thiserror::Error;

use super::{GroupId, Token};

/// Fatal problems found while tokenizing a boundary condition string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsingError {
    #[error("illegal character in input: '{1}'")]
    IllegalCharacter(usize, char),
}

impl ParsingError {
    /// Byte offset into the input where the problem was found.
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::IllegalCharacter(offset, _) => *offset,
        }
    }
}

/// Tokens the grammar did not recognize and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingWarning {
    pub offset: usize,
    pub token: Token,
}

/// Problems with individual entries of an array-mode configuration. These
/// are collected, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("entry {entry}: unknown variable or group '{name}'")]
    UnknownVariable { entry: usize, name: String },
    #[error("entry {entry}: variables listed without a boundary condition name")]
    MissingName { entry: usize },
}

impl ValidationError {
    pub fn entry(&self) -> usize {
        match self {
            ValidationError::UnknownVariable { entry, .. } => *entry,
            ValidationError::MissingName { entry } => *entry,
        }
    }
}

/// Failure reported by the host runtime for one of its operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error code {code}: {message}")]
pub struct ExternalError {
    pub code: i32,
    pub message: String,
}

impl ExternalError {
    pub fn new(code: i32, message: impl Into<String>) -> ExternalError {
        ExternalError {
            code,
            message: message.into(),
        }
    }
}

/// A single failed call while registering or synchronizing a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("selecting boundary condition '{bc}' for {variable} failed, {source}")]
    Select {
        variable: String,
        bc: String,
        source: ExternalError,
    },
    #[error("synchronizing {variable} (group {group}) failed, {source}")]
    Sync {
        variable: String,
        group: GroupId,
        source: ExternalError,
    },
    #[error("no group found for {variable}")]
    Unresolved { variable: String },
}

impl RegistrationError {
    pub fn variable(&self) -> &str {
        match self {
            RegistrationError::Select { variable, .. } => variable,
            RegistrationError::Sync { variable, .. } => variable,
            RegistrationError::Unresolved { variable } => variable,
        }
    }
}
