//! Rules-driven N-Triples conversion
//!
//! Turns flat subject-predicate-object records into valid N-Triples terms.
//! A small rules file declares namespace prefixes, a language tag, the kind
//! of each predicate's values, and wildcard conventions for whole families of
//! predicates.
//!
//! # Modules
//!
//! - [`literal`]: literal kinds and their XSD datatypes
//! - [`curie`]: prefix table, CURIE expansion and compaction
//! - [`rules`]: rules file parser and [`Ruleset`]
//! - [`resolve`]: effective kind of a predicate
//! - [`timestamp`]: date and date-time normalisation
//! - [`enhance`]: triple rewriting
//!
//! ## Example Usage
//!
//! ```rust
//! use ntriples_rules::{enhance_triple, parse_rules, Triple};
//!
//! let rules = parse_rules("@prefix ui http://mysite.com/ui/\nui:someDate date");
//!
//! let triple = Triple::new("ui:a", "ui:someDate", "2018-11-18");
//! let enhanced = enhance_triple(&rules, &triple).unwrap();
//!
//! assert_eq!(enhanced.subject, "<http://mysite.com/ui/a>");
//! assert_eq!(enhanced.predicate, "<http://mysite.com/ui/someDate>");
//! assert_eq!(
//!     enhanced.object,
//!     "\"2018-11-18\"^^<http://www.w3.org/2001/XMLSchema#date>"
//! );
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod curie;
pub mod enhance;
pub mod literal;
pub mod resolve;
pub mod rules;
pub mod timestamp;

// Re-export main types for convenience
pub use curie::{deflate, inflate, Namespace, PrefixTable};

pub use enhance::{
    enhance, enhance_all, enhance_batch, enhance_triple, par_enhance_all,
    EnhanceError, EnhanceOptions, EnhanceResult, Triple,
};

pub use literal::{kind_from_token, quote_typed, LiteralKind};

pub use resolve::resolve;

pub use rules::{
    parse_rules, DefaultRule, PredicateRule, Ruleset, RulesError, RulesResult,
    WildcardPattern,
};

pub use timestamp::TimestampError;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
