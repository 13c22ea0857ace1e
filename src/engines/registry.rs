//! Ordered set of search engines.
//!
//! # Responsibilities
//! - Compile fixed engines and URL templates into one ordered list
//! - Report and drop templates that fail to parse
//! - Look up the first engine structurally matching a request URL
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - Linear scan: the list is small and the predicate is two string compares
//! - First structural match wins, even if its key is absent

use url::Url;

use super::matcher::{EngineMatcher, MatchOutcome};
use super::template::parse_template;

/// The compiled, read-only list of engines.
#[derive(Debug, Clone, Default)]
pub struct EngineRegistry {
    engines: Vec<EngineMatcher>,
}

impl EngineRegistry {
    /// Build a registry from fixed engines followed by parsed templates.
    ///
    /// Templates that fail to parse are logged and left out.
    pub fn build<S: AsRef<str>>(fixed: Vec<EngineMatcher>, templates: &[S]) -> Self {
        let mut engines = fixed;

        for template in templates {
            match parse_template(template.as_ref()) {
                Ok(engine) => engines.push(engine),
                Err(e) => {
                    tracing::warn!(
                        template = %e.template,
                        stage = %e.stage,
                        "Skipping search template that failed to parse"
                    );
                }
            }
        }

        Self { engines }
    }

    /// Find the first engine whose domain and path match `url`.
    pub fn lookup(&self, url: &Url) -> MatchOutcome<'_> {
        self.engines
            .iter()
            .map(|engine| engine.match_url(url))
            .find(|outcome| outcome.is_match())
            .unwrap_or(MatchOutcome::NoMatch)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EngineMatcher> {
        self.engines.iter()
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
