//! Search engine subsystem.
//!
//! # Data Flow
//! ```text
//! Registry Compilation (at startup):
//!     fixed (domain, path, key) triples + URL templates
//!     → template.rs (parse templates, report failing stage)
//!     → registry.rs (fixed first, then parsed templates, failures dropped)
//!     → Freeze as immutable EngineRegistry
//!
//! Per request:
//!     request URL
//!     → registry.rs (first engine whose host and path match)
//!     → matcher.rs (extract query key value)
//!     → Return: NoMatch | KeyAbsent | Query(value)
//! ```

pub mod matcher;
pub mod registry;
pub mod template;

pub use matcher::{EngineMatcher, MatchOutcome};
pub use registry::EngineRegistry;
pub use template::{parse_template, ParseStage, TemplateError};
