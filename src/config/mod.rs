//! Parameter files describing which boundary conditions to apply

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::language::GroupId;
use crate::table::{Entry, Source};

/// Number of array-mode slots available unless a parameter file says
/// otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed reading {filename}: {source}")]
    Io {
        filename: String,
        source: std::io::Error,
    },
    #[error("invalid parameter file: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{count} boundary condition entries given but only {capacity} are allowed")]
    TooManyEntries { count: usize, capacity: usize },
    #[error("both bc_string and bcs entries are set; only one may be used")]
    Ambiguous,
}

/// The settings read from a parameter file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameters {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default)]
    pub bc_string: Option<String>,
    #[serde(default)]
    pub bcs: Vec<Entry>,
    /// Variables known to the host, by fully-qualified name.
    #[serde(default)]
    pub variables: BTreeMap<String, i32>,
}

impl Default for Parameters {
    fn default() -> Self {
        Parameters {
            verbose: false,
            capacity: DEFAULT_CAPACITY,
            bc_string: None,
            bcs: Vec::new(),
            variables: BTreeMap::new(),
        }
    }
}

impl Parameters {
    /// Read and validate a parameter file.
    pub fn load(filename: &Path) -> Result<Parameters, ConfigError> {
        let content = match std::fs::read_to_string(filename) {
            Ok(content) => content,
            Err(error) => {
                debug!(?error);
                return Err(ConfigError::Io {
                    filename: filename
                        .display()
                        .to_string(),
                    source: error,
                });
            }
        };

        Parameters::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Parameters, ConfigError> {
        let parameters: Parameters = toml::from_str(content)?;
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self
            .bcs
            .len()
            > self.capacity
        {
            return Err(ConfigError::TooManyEntries {
                count: self
                    .bcs
                    .len(),
                capacity: self.capacity,
            });
        }
        if self
            .bc_string
            .is_some()
            && !self
                .bcs
                .is_empty()
        {
            return Err(ConfigError::Ambiguous);
        }
        Ok(())
    }

    /// The active front end. With neither set, an empty string.
    pub fn source(&self) -> Source {
        if !self
            .bcs
            .is_empty()
        {
            Source::Array(
                self.bcs
                    .clone(),
            )
        } else {
            Source::String(
                self.bc_string
                    .clone()
                    .unwrap_or_default(),
            )
        }
    }

    /// The host registry described by the `[variables]` table.
    pub fn registry(&self) -> BTreeMap<String, GroupId> {
        self.variables
            .iter()
            .map(|(name, id)| (name.clone(), GroupId(*id)))
            .collect()
    }
}
