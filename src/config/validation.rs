//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, value ranges and TLD labels
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: OmniboxConfig → Result<(), Vec<ValidationError>>
//! - Templates are not validated here; unparseable ones are dropped at registry build

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::OmniboxConfig;
use crate::namespace::is_word;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field} address `{value}`")]
    InvalidAddress { field: &'static str, value: String },

    #[error("fixed engine #{index} has an empty {field}")]
    EmptyEngineField { index: usize, field: &'static str },

    #[error("no alternative-namespace TLDs configured")]
    NoTlds,

    #[error("invalid TLD label `{0}`")]
    InvalidTld(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &OmniboxConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    for (index, engine) in config.engines.fixed.iter().enumerate() {
        if engine.domain.is_empty() {
            errors.push(ValidationError::EmptyEngineField { index, field: "domain" });
        }
        if engine.key.is_empty() {
            errors.push(ValidationError::EmptyEngineField { index, field: "key" });
        }
    }

    // A TLD file replaces the inline list and is checked once loaded
    if config.namespace.tlds_file.is_none() {
        errors.extend(validate_tlds(config.namespace.tlds.iter().map(String::as_str)));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check a TLD list: non-empty, every label made of word characters.
pub fn validate_tlds<'a>(tlds: impl IntoIterator<Item = &'a str>) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut count = 0;

    for tld in tlds {
        count += 1;
        if !is_word(tld) {
            errors.push(ValidationError::InvalidTld(tld.to_string()));
        }
    }

    if count == 0 {
        errors.push(ValidationError::NoTlds);
    }
    errors
}
