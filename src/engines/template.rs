//! Search engine URL template parsing.
//!
//! Turns a browser-style template such as
//! `https://www.ecosia.org/search?q=%s&addon=opensearch` into an
//! [`EngineMatcher`]. Templates may carry vendor placeholders (`{...}`)
//! anywhere in the query string; only a literal `key=%s` pair is needed.

use std::fmt;

use thiserror::Error;

use super::matcher::EngineMatcher;

/// Placeholder meaning "optional path wildcard". It sits between the path
/// and the `?` in some templates and must go before the path is split off.
pub const PATH_WILDCARD: &str = "{google:pathWildcard}";

/// Marker for where the search text is injected.
pub const QUERY_PLACEHOLDER: &str = "%s";

/// The part of a template that could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    Domain,
    Path,
    Key,
}

impl fmt::Display for ParseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParseStage::Domain => "domain",
            ParseStage::Path => "path",
            ParseStage::Key => "key",
        })
    }
}

/// A template that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse {stage} of search template `{template}`")]
pub struct TemplateError {
    pub stage: ParseStage,
    pub template: String,
}

impl TemplateError {
    fn new(stage: ParseStage, template: &str) -> Self {
        Self {
            stage,
            template: template.to_string(),
        }
    }
}

/// Parse a URL template into an engine matcher.
pub fn parse_template(template: &str) -> Result<EngineMatcher, TemplateError> {
    let s = template.replacen(PATH_WILDCARD, "", 1);

    // scheme://domain/rest
    let (domain, rest) = s
        .split_once("://")
        .and_then(|(_, after)| after.split_once('/'))
        .filter(|(domain, _)| !domain.is_empty())
        .ok_or_else(|| TemplateError::new(ParseStage::Domain, template))?;

    let (path, query) = rest
        .split_once('?')
        .ok_or_else(|| TemplateError::new(ParseStage::Path, template))?;

    let key = find_query_key(query).ok_or_else(|| TemplateError::new(ParseStage::Key, template))?;

    Ok(EngineMatcher::new(domain, path, key))
}

/// First `&`-separated segment of the form `key=%s`. Within a segment the key
/// runs up to the last `=%s`, so `a=b=%s` yields `a=b`.
fn find_query_key(query: &str) -> Option<&str> {
    let marker = format!("={QUERY_PLACEHOLDER}");
    query.split('&').find_map(|segment| {
        segment
            .rfind(marker.as_str())
            .filter(|&idx| idx > 0)
            .map(|idx| &segment[..idx])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(template: &str) -> (String, String, String) {
        let engine = parse_template(template).unwrap();
        (
            engine.domain().to_string(),
            engine.path().to_string(),
            engine.key().to_string(),
        )
    }

    fn stage(template: &str) -> ParseStage {
        parse_template(template).unwrap_err().stage
    }

    #[test]
    fn test_parse_ecosia() {
        assert_eq!(
            parts("https://www.ecosia.org/search?q=%s&addon=opensearch"),
            ("www.ecosia.org".into(), "search".into(), "q".into())
        );
    }

    #[test]
    fn test_parse_empty_path() {
        assert_eq!(
            parts("https://duckduckgo.com/?q=%s"),
            ("duckduckgo.com".into(), "".into(), "q".into())
        );
    }

    #[test]
    fn test_parse_strips_path_wildcard() {
        assert_eq!(
            parts("https://search.yahoo.com/search{google:pathWildcard}?ei={inputEncoding}&fr=crmas&p=%s"),
            ("search.yahoo.com".into(), "search".into(), "p".into())
        );
    }

    #[test]
    fn test_parse_key_not_first() {
        assert_eq!(
            parts("https://www.bing.com/search?PC=U316&q=%s&FORM=CHROMN"),
            ("www.bing.com".into(), "search".into(), "q".into())
        );
    }

    #[test]
    fn test_placeholders_do_not_block_key() {
        assert_eq!(
            parts("https://example.org/find?{vendor:a}{vendor:b}&term=%s&{vendor:c}ie={inputEncoding}"),
            ("example.org".into(), "find".into(), "term".into())
        );
    }

    #[test]
    fn test_first_key_wins() {
        assert_eq!(
            parts("https://example.org/s?a=%s&b=%s").2,
            "a".to_string()
        );
    }

    #[test]
    fn test_missing_scheme_fails_domain() {
        let template = "{google:baseURL}search?q=%s&{google:RLZ}ie={inputEncoding}";
        let err = parse_template(template).unwrap_err();
        assert_eq!(err.stage, ParseStage::Domain);
        assert_eq!(err.template, template);
        assert_eq!(stage("https://no-slash-after-host"), ParseStage::Domain);
        assert_eq!(stage("https:///search?q=%s"), ParseStage::Domain);
    }

    #[test]
    fn test_missing_question_mark_fails_path() {
        assert_eq!(stage("https://example.org/search/%s"), ParseStage::Path);
    }

    #[test]
    fn test_missing_key_fails_key() {
        assert_eq!(stage("https://example.org/search?q={searchTerms}"), ParseStage::Key);
        assert_eq!(stage("https://example.org/search?=%s"), ParseStage::Key);
        assert_eq!(stage("https://example.org/search?"), ParseStage::Key);
    }

    #[test]
    fn test_error_message_names_stage() {
        let err = parse_template("https://example.org/search").unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to parse path of search template `https://example.org/search`"
        );
    }
}
