//! Search engine URL matching.
//!
//! # Responsibilities
//! - Hold one engine's query URL shape (domain, path, query key)
//! - Decide whether a request URL structurally matches that shape
//! - Extract the search text from a matching URL
//!
//! # Design Decisions
//! - Host matching is exact against what the URL parser produced
//! - Path matching is exact (`/` + path), not a prefix
//! - Structural match and key presence are reported separately

use std::fmt;

use serde::Serialize;
use url::Url;

/// One search engine's query URL shape, e.g. `www.ecosia.org/search?q=%s`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineMatcher {
    domain: String,
    path: String,
    key: String,
}

impl EngineMatcher {
    /// Create a matcher from its parts.
    ///
    /// `path` is given without the leading slash; an empty path matches `/`.
    pub fn new(domain: impl Into<String>, path: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns true if the URL's host and path are this engine's.
    pub fn matches(&self, url: &Url) -> bool {
        url.host_str() == Some(self.domain.as_str())
            && url
                .path()
                .strip_prefix('/')
                .is_some_and(|p| p == self.path)
    }

    /// Match a URL and pull out the first value of this engine's query key.
    pub fn match_url(&self, url: &Url) -> MatchOutcome<'_> {
        if !self.matches(url) {
            return MatchOutcome::NoMatch;
        }

        match url.query_pairs().find(|(k, _)| k == self.key.as_str()) {
            Some((_, value)) => MatchOutcome::Query {
                engine: self,
                value: value.into_owned(),
            },
            None => MatchOutcome::KeyAbsent { engine: self },
        }
    }
}

impl fmt::Display for EngineMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}?{}=%s", self.domain, self.path, self.key)
    }
}

/// Result of matching a request URL against one engine or a whole registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    /// No engine's domain and path matched.
    NoMatch,
    /// An engine matched but the URL carries no value for its key.
    KeyAbsent { engine: &'a EngineMatcher },
    /// An engine matched; `value` is the decoded search text (possibly empty).
    Query { engine: &'a EngineMatcher, value: String },
}

impl MatchOutcome<'_> {
    /// The extracted search text, if any.
    pub fn query(&self) -> Option<&str> {
        match self {
            MatchOutcome::Query { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, MatchOutcome::NoMatch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ecosia() -> EngineMatcher {
        EngineMatcher::new("www.ecosia.org", "search", "q")
    }

    #[test]
    fn test_match_extracts_query() {
        let engine = ecosia();
        let url = Url::parse("https://www.ecosia.org/search?q=opennic.geek").unwrap();
        assert_eq!(engine.match_url(&url).query(), Some("opennic.geek"));
    }

    #[test]
    fn test_other_path_is_no_match() {
        let engine = ecosia();
        let url = Url::parse("https://www.ecosia.org/other?q=x").unwrap();
        assert_eq!(engine.match_url(&url), MatchOutcome::NoMatch);

        // Path is exact, not a prefix
        let url = Url::parse("https://www.ecosia.org/search/images?q=x").unwrap();
        assert_eq!(engine.match_url(&url), MatchOutcome::NoMatch);
    }

    #[test]
    fn test_other_host_is_no_match() {
        let engine = ecosia();
        let url = Url::parse("https://ecosia.org/search?q=x").unwrap();
        assert!(!engine.match_url(&url).is_match());
    }

    #[test]
    fn test_key_absent_and_empty_are_distinct() {
        let engine = ecosia();

        let absent = Url::parse("https://www.ecosia.org/search?other=x").unwrap();
        assert_eq!(
            engine.match_url(&absent),
            MatchOutcome::KeyAbsent { engine: &engine }
        );

        let empty = Url::parse("https://www.ecosia.org/search?q=").unwrap();
        assert_eq!(
            engine.match_url(&empty),
            MatchOutcome::Query {
                engine: &engine,
                value: String::new()
            }
        );
    }

    #[test]
    fn test_first_value_wins_and_is_decoded() {
        let engine = ecosia();
        let url = Url::parse("https://www.ecosia.org/search?q=foo+bar.geek&q=second").unwrap();
        assert_eq!(engine.match_url(&url).query(), Some("foo bar.geek"));
    }

    #[test]
    fn test_empty_path_matches_root() {
        let engine = EngineMatcher::new("duckduckgo.com", "", "q");
        let url = Url::parse("https://duckduckgo.com/?q=mysite.pirate").unwrap();
        assert_eq!(engine.match_url(&url).query(), Some("mysite.pirate"));

        let url = Url::parse("https://duckduckgo.com/html?q=mysite.pirate").unwrap();
        assert!(!engine.matches(&url));
    }

    #[test]
    fn test_display() {
        assert_eq!(ecosia().to_string(), "www.ecosia.org/search?q=%s");
    }
}
