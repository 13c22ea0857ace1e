//! Redirect decision for outgoing search requests.

use url::Url;

use crate::engines::{EngineRegistry, MatchOutcome};
use crate::intercept::decision::{Decision, RequestDetails};
use crate::namespace::TldSet;

/// Why a request was or was not redirected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Request was not user-initiated.
    SkippedAutomatic,
    /// Request URL could not be parsed.
    InvalidUrl,
    /// No engine's domain and path matched.
    NoEngine,
    /// An engine matched but its query key was missing.
    KeyAbsent,
    /// The search text is not an alternative-namespace domain.
    NotCandidate,
    /// The search text is a domain; go there.
    Redirect { domain: String },
}

impl Outcome {
    /// Stable label for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::SkippedAutomatic => "skipped_automatic",
            Outcome::InvalidUrl => "invalid_url",
            Outcome::NoEngine => "no_engine",
            Outcome::KeyAbsent => "key_absent",
            Outcome::NotCandidate => "not_candidate",
            Outcome::Redirect { .. } => "redirect",
        }
    }

    pub fn into_decision(self) -> Decision {
        match self {
            Outcome::Redirect { domain } => Decision::redirect_to_domain(&domain),
            _ => Decision::PassThrough,
        }
    }
}

/// Turns request URLs into redirect decisions.
///
/// Holds only immutable data; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Interceptor {
    registry: EngineRegistry,
    tlds: TldSet,
}

impl Interceptor {
    pub fn new(registry: EngineRegistry, tlds: TldSet) -> Self {
        Self { registry, tlds }
    }

    pub fn registry(&self) -> &EngineRegistry {
        &self.registry
    }

    pub fn tlds(&self) -> &TldSet {
        &self.tlds
    }

    /// Decide what to do with a request observed by the host.
    pub fn handle_request(&self, request: &RequestDetails) -> Decision {
        self.handle(&request.url, request.is_user_initiated())
    }

    /// Decide what to do with `request_url`.
    pub fn handle(&self, request_url: &str, user_initiated: bool) -> Decision {
        let outcome = self.evaluate(request_url, user_initiated);
        crate::observability::metrics::record_decision(outcome.label());
        outcome.into_decision()
    }

    /// Run the decision steps and report which one settled it.
    pub fn evaluate(&self, request_url: &str, user_initiated: bool) -> Outcome {
        if !user_initiated {
            return Outcome::SkippedAutomatic;
        }

        tracing::debug!(url = %request_url, "Inspecting user request");

        let url = match Url::parse(request_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!(url = %request_url, error = %e, "Unparseable request URL");
                return Outcome::InvalidUrl;
            }
        };

        let query = match self.registry.lookup(&url) {
            MatchOutcome::NoMatch => return Outcome::NoEngine,
            MatchOutcome::KeyAbsent { engine } => {
                tracing::debug!(engine = %engine, "Search URL without query");
                return Outcome::KeyAbsent;
            }
            MatchOutcome::Query { engine, value } => {
                tracing::debug!(engine = %engine, query = %value, "Search query extracted");
                value
            }
        };

        if !self.tlds.is_candidate_domain(&query) {
            return Outcome::NotCandidate;
        }

        tracing::info!(domain = %query, "Redirecting search to alternative-namespace domain");
        Outcome::Redirect { domain: query }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::EngineMatcher;

    fn interceptor() -> Interceptor {
        let registry = EngineRegistry::build(
            vec![EngineMatcher::new("www.google.com", "search", "q")],
            &[
                "https://duckduckgo.com/?q=%s",
                "https://www.ecosia.org/search?q=%s&addon=opensearch",
            ],
        );
        Interceptor::new(registry, TldSet::opennic())
    }

    #[test]
    fn test_redirects_candidate_query() {
        let decision = interceptor().handle("https://duckduckgo.com/?q=mysite.pirate", true);
        assert_eq!(decision.redirect_url(), Some("http://mysite.pirate/"));
    }

    #[test]
    fn test_passes_icann_domain() {
        let interceptor = interceptor();
        assert_eq!(
            interceptor.evaluate("https://duckduckgo.com/?q=example.com", true),
            Outcome::NotCandidate
        );
        assert!(interceptor
            .handle("https://duckduckgo.com/?q=example.com", true)
            .is_pass_through());
    }

    #[test]
    fn test_automatic_requests_never_redirect() {
        let interceptor = interceptor();
        for url in [
            "https://duckduckgo.com/?q=mysite.pirate",
            "https://www.google.com/search?q=opennic.geek",
            "not a url",
        ] {
            assert_eq!(interceptor.evaluate(url, false), Outcome::SkippedAutomatic);
            assert_eq!(interceptor.handle(url, false), Decision::PassThrough);
        }
    }

    #[test]
    fn test_each_pass_through_reason() {
        let interceptor = interceptor();
        assert_eq!(interceptor.evaluate("::::", true), Outcome::InvalidUrl);
        assert_eq!(
            interceptor.evaluate("https://example.com/?q=a.geek", true),
            Outcome::NoEngine
        );
        assert_eq!(
            interceptor.evaluate("https://www.ecosia.org/search?p=a.geek", true),
            Outcome::KeyAbsent
        );
        assert_eq!(
            interceptor.evaluate("https://www.ecosia.org/search?q=", true),
            Outcome::NotCandidate
        );
    }

    #[test]
    fn test_redirect_drops_everything_but_domain() {
        let decision = interceptor().handle(
            "https://www.google.com:443/search?q=opennic.geek&hl=en#frag",
            true,
        );
        assert_eq!(decision, Decision::redirect_to_domain("opennic.geek"));
    }

    #[test]
    fn test_handle_request_uses_heuristic() {
        let interceptor = interceptor();
        let mut request = RequestDetails::new("https://duckduckgo.com/?q=mysite.pirate");
        assert!(!interceptor.handle_request(&request).is_pass_through());

        request.initiator = Some("https://duckduckgo.com".into());
        assert!(interceptor.handle_request(&request).is_pass_through());
    }

    #[test]
    fn test_idempotent() {
        let interceptor = interceptor();
        let url = "https://www.ecosia.org/search?q=opennic.geek";
        let first = interceptor.handle(url, true);
        for _ in 0..3 {
            assert_eq!(interceptor.handle(url, true), first);
        }
    }
}
