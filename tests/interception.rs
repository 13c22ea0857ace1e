//! End-to-end interception with the built-in engine and TLD lists.

use opennic_omnibox::lifecycle::build_interceptor;
use opennic_omnibox::{Decision, Interceptor, OmniboxConfig, RequestDetails};

fn default_interceptor() -> Interceptor {
    build_interceptor(&OmniboxConfig::default()).unwrap()
}

#[test]
fn test_redirects_opennic_search_on_every_default_engine() {
    let interceptor = default_interceptor();

    for url in [
        "https://www.google.com/search?q=mysite.pirate&oq=mysite.pirate",
        "https://www.bing.com/search?q=mysite.pirate&PC=U316&FORM=CHROMN",
        "https://search.yahoo.com/search?ei=UTF-8&fr=crmas&p=mysite.pirate",
        "https://duckduckgo.com/?q=mysite.pirate",
        "https://www.ecosia.org/search?q=mysite.pirate&addon=opensearch",
    ] {
        assert_eq!(
            interceptor.handle(url, true),
            Decision::redirect_to_domain("mysite.pirate"),
            "{url}"
        );
    }
}

#[test]
fn test_icann_domain_passes_through() {
    let interceptor = default_interceptor();
    assert_eq!(
        interceptor.handle("https://duckduckgo.com/?q=example.com", true),
        Decision::PassThrough
    );
}

#[test]
fn test_plain_search_passes_through() {
    let interceptor = default_interceptor();
    for url in [
        "https://duckduckgo.com/?q=rust+programming",
        "https://duckduckgo.com/?q=sub.site.geek",
        "https://duckduckgo.com/?q=",
        "https://duckduckgo.com/",
        "https://duckduckgo.com/settings?q=site.geek",
        "https://example.org/?q=site.geek",
        "not even a url",
    ] {
        assert!(interceptor.handle(url, true).is_pass_through(), "{url}");
    }
}

#[test]
fn test_page_initiated_requests_pass_through() {
    let interceptor = default_interceptor();

    let mut request = RequestDetails::new("https://duckduckgo.com/?q=mysite.pirate");
    request.origin_url = Some("https://duckduckgo.com/".into());
    assert_eq!(interceptor.handle_request(&request), Decision::PassThrough);

    let mut request = RequestDetails::new("https://duckduckgo.com/?q=mysite.pirate");
    request.initiator = Some("https://duckduckgo.com".into());
    assert_eq!(interceptor.handle_request(&request), Decision::PassThrough);
}

#[test]
fn test_custom_engines_and_tlds() {
    let mut config = OmniboxConfig::default();
    config.engines.fixed.clear();
    config.engines.templates = vec![
        "https://search.example/find?{vendor:lang}&term=%s".to_string(),
        "broken-template".to_string(),
    ];
    config.namespace.tlds = vec!["lan".to_string()];

    let interceptor = build_interceptor(&config).unwrap();
    assert_eq!(interceptor.registry().len(), 1);

    assert_eq!(
        interceptor.handle("https://search.example/find?term=printer.lan", true),
        Decision::redirect_to_domain("printer.lan")
    );
    assert!(interceptor
        .handle("https://search.example/find?term=mysite.pirate", true)
        .is_pass_through());
}
