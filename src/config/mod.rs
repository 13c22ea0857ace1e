//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, resolve TLD list file)
//!     → validation.rs (semantic checks)
//!     → OmniboxConfig (validated, immutable)
//!     → compiled once into EngineRegistry + TldSet at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_tlds, ConfigError};
pub use schema::{
    EnginesConfig, FixedEngineConfig, ListenerConfig, NamespaceConfig, ObservabilityConfig,
    OmniboxConfig, TimeoutConfig,
};
pub use validation::ValidationError;
