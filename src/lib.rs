//! OpenNIC omnibox redirector.
//!
//! Watches outgoing search-engine requests and, when the search text is a
//! bare domain under an alternative-namespace TLD (OpenNIC by default),
//! tells the host to go straight to `http://<domain>/` instead.

pub mod config;
pub mod engines;
pub mod http;
pub mod intercept;
pub mod lifecycle;
pub mod namespace;
pub mod observability;

pub use config::OmniboxConfig;
pub use engines::{EngineMatcher, EngineRegistry, MatchOutcome};
pub use http::HttpServer;
pub use intercept::{Decision, Interceptor, RequestDetails};
pub use lifecycle::Shutdown;
pub use namespace::TldSet;
