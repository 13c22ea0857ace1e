//! Startup sequence: compile configuration into an interceptor.

use crate::config::{load_tlds, ConfigError, OmniboxConfig};
use crate::engines::EngineRegistry;
use crate::intercept::Interceptor;
use crate::observability::metrics;

/// Build the engine registry and TLD set described by `config`.
///
/// Templates that fail to parse are logged and skipped; only an unreadable or
/// invalid TLD list is fatal.
pub fn build_interceptor(config: &OmniboxConfig) -> Result<Interceptor, ConfigError> {
    let registry = EngineRegistry::build(
        config.engines.fixed_matchers(),
        &config.engines.templates,
    );
    let tlds = load_tlds(&config.namespace)?;

    for engine in registry.iter() {
        tracing::info!(engine = %engine, "Registered search engine");
    }
    let tld_list = tlds.iter().collect::<Vec<_>>().join(", ");
    tracing::info!(
        engines = registry.len(),
        tlds = %tld_list,
        "Interceptor initialized"
    );
    metrics::record_startup(registry.len(), tlds.len());

    Ok(Interceptor::new(registry, tlds))
}
