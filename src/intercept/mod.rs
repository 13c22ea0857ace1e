//! Request interception subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing request (url, origin_url, initiator)
//!     → skip unless user-initiated
//!     → EngineRegistry::lookup (search text or no match)
//!     → TldSet::is_candidate_domain
//!     → Decision: PassThrough | Redirect("http://<domain>/")
//! ```
//!
//! # Design Decisions
//! - Pure function of its inputs and the immutable registry/TLD set
//! - No error path: every failure degrades to pass-through

pub mod decision;
pub mod interceptor;

pub use decision::{Decision, RequestDetails};
pub use interceptor::{Interceptor, Outcome};
