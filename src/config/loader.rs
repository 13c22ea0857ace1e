//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{NamespaceConfig, OmniboxConfig};
use crate::config::validation::{validate_config, validate_tlds, ValidationError};
use crate::namespace::TldSet;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
///
/// A relative `namespace.tlds_file` is resolved against the config file's directory.
pub fn load_config(path: &Path) -> Result<OmniboxConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: OmniboxConfig = toml::from_str(&content)?;

    let resolved = match (&config.namespace.tlds_file, path.parent()) {
        (Some(file), Some(dir)) if Path::new(file).is_relative() => {
            Some(dir.join(file).to_string_lossy().into_owned())
        }
        _ => None,
    };
    if resolved.is_some() {
        config.namespace.tlds_file = resolved;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Build the TLD set, reading the list file when one is configured.
pub fn load_tlds(namespace: &NamespaceConfig) -> Result<TldSet, ConfigError> {
    let tlds = match &namespace.tlds_file {
        Some(file) => {
            let contents = fs::read_to_string(file).map_err(|source| ConfigError::Io {
                path: PathBuf::from(file),
                source,
            })?;
            TldSet::from_list(&contents)
        }
        None => TldSet::new(namespace.tlds.iter().cloned()),
    };

    let errors = validate_tlds(tlds.iter());
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    Ok(tlds)
}
