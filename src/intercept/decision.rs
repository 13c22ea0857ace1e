//! Per-request input and output types.

use serde::{Deserialize, Serialize};

/// What the host network layer knows about an outgoing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestDetails {
    /// Fully qualified request URL.
    pub url: String,

    /// Page the request originated from (reported by Firefox).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_url: Option<String>,

    /// Initiating origin (reported by Chrome).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initiator: Option<String>,
}

impl RequestDetails {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// A request with no originating page and no initiator is taken to be
    /// typed by the user into the address bar or search box.
    pub fn is_user_initiated(&self) -> bool {
        self.origin_url.is_none() && self.initiator.is_none()
    }
}

/// What the host should do with a request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Decision {
    /// Leave the request untouched.
    PassThrough,
    /// Replace the request URL before it is sent.
    Redirect { redirect_url: String },
}

impl Decision {
    /// Redirect to the root of `domain` over plain HTTP.
    pub fn redirect_to_domain(domain: &str) -> Self {
        Decision::Redirect {
            redirect_url: format!("http://{domain}/"),
        }
    }

    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            Decision::Redirect { redirect_url } => Some(redirect_url),
            Decision::PassThrough => None,
        }
    }

    pub fn is_pass_through(&self) -> bool {
        matches!(self, Decision::PassThrough)
    }
}
