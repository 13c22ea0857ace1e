//! Alternative-namespace domain classification.
//!
//! Decides whether a search query is, without doubt, a bare domain under one
//! of the configured non-ICANN top-level domains (OpenNIC by default).
//!
//! # Design Decisions
//! - Accepts exactly `label.tld`: one dot, label of `[A-Za-z0-9_]`
//! - TLD comparison is case-sensitive
//! - No regex: a split and a set lookup

use std::collections::BTreeSet;

/// OpenNIC TLDs as of 2020-06-06.
pub const OPENNIC_TLDS: &[&str] = &[
    "bbs", "chan", "cyb", "dyn", "epic", "geek", "gopher", "indy", "libre", "neo", "null", "o",
    "oss", "oz", "parody", "pirate",
];

/// Closed set of top-level domain labels treated as alternative-namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldSet {
    labels: BTreeSet<String>,
}

impl TldSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// The OpenNIC TLD list.
    pub fn opennic() -> Self {
        Self::new(OPENNIC_TLDS.iter().copied())
    }

    /// Parse a TLD list file: one label per line, `#` starts a comment.
    pub fn from_list(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(|line| line.split('#').next().unwrap_or_default().trim())
                .filter(|line| !line.is_empty()),
        )
    }

    pub fn contains(&self, tld: &str) -> bool {
        self.labels.contains(tld)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns true if `s` is a single word-character label followed by a
    /// TLD from this set, e.g. `opennic.geek`.
    pub fn is_candidate_domain(&self, s: &str) -> bool {
        match s.split_once('.') {
            Some((label, tld)) => is_word(label) && self.contains(tld),
            None => false,
        }
    }
}

impl Default for TldSet {
    fn default() -> Self {
        Self::opennic()
    }
}

/// Non-empty and made only of ASCII letters, digits and underscores.
pub fn is_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
