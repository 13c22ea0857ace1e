//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::engines::EngineMatcher;
use crate::namespace::OPENNIC_TLDS;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OmniboxConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Search engines to intercept.
    pub engines: EnginesConfig,

    /// Alternative-namespace TLDs.
    pub namespace: NamespaceConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8053").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8053".to_string(),
        }
    }
}

/// A search engine given directly as its parts rather than as a template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FixedEngineConfig {
    /// Host name, e.g. "www.google.com".
    pub domain: String,

    /// Path without the leading slash.
    #[serde(default)]
    pub path: String,

    /// Query parameter carrying the search text.
    pub key: String,
}

impl From<&FixedEngineConfig> for EngineMatcher {
    fn from(cfg: &FixedEngineConfig) -> Self {
        EngineMatcher::new(cfg.domain.clone(), cfg.path.clone(), cfg.key.clone())
    }
}

/// Search engine definitions. Fixed engines are matched before templates.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnginesConfig {
    /// Engines whose real template cannot be parsed.
    pub fixed: Vec<FixedEngineConfig>,

    /// URL templates with a `%s` query placeholder.
    pub templates: Vec<String>,
}

impl EnginesConfig {
    pub fn fixed_matchers(&self) -> Vec<EngineMatcher> {
        self.fixed.iter().map(EngineMatcher::from).collect()
    }
}

impl Default for EnginesConfig {
    fn default() -> Self {
        Self {
            // Google's template is built from vendor macros and has no fixed host
            fixed: vec![FixedEngineConfig {
                domain: "www.google.com".to_string(),
                path: "search".to_string(),
                key: "q".to_string(),
            }],
            // Chrome defaults as of 2020-06-06
            templates: vec![
                "{google:baseURL}search?q=%s&{google:RLZ}{google:originalQueryForSuggestion}{google:assistedQueryStats}{google:searchFieldtrialParameter}{google:iOSSearchLanguage}{google:searchClient}{google:sourceId}{google:contextualSearchVersion}ie={inputEncoding}".to_string(),
                "https://www.bing.com/search?q=%s&PC=U316&FORM=CHROMN".to_string(),
                "https://search.yahoo.com/search{google:pathWildcard}?ei={inputEncoding}&fr=crmas&p=%s".to_string(),
                "https://duckduckgo.com/?q=%s".to_string(),
                "https://www.ecosia.org/search?q=%s&addon=opensearch".to_string(),
            ],
        }
    }
}

/// Alternative-namespace TLD configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NamespaceConfig {
    /// TLD labels, without the leading dot.
    pub tlds: Vec<String>,

    /// Optional list file (one label per line) replacing `tlds`.
    pub tlds_file: Option<String>,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            tlds: OPENNIC_TLDS.iter().map(|t| t.to_string()).collect(),
            tlds_file: None,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 5 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9053".to_string(),
        }
    }
}
