//! Rules files
//!
//! A rules file is line oriented:
//!
//! ```text
//! @language en-GB
//! @prefix ui http://mysite.com/ui/
//! @default localized ui:i18n/eng/gb/**
//! @default iri ui:**/*-id
//! ui:someDate date
//! ui:tags string lang many
//! ```
//!
//! Lines that match none of these shapes are ignored, so parsing never fails.
//!
//! # Example
//!
//! ```rust
//! use ntriples_rules::rules::parse_rules;
//! use ntriples_rules::LiteralKind;
//!
//! let rules = parse_rules("@prefix ui http://mysite.com/ui/\nui:age integer");
//! assert_eq!(rules.predicate_kind("ui:age"), Some(LiteralKind::Int));
//! assert_eq!(rules.prefixes.inflate("ui:age"), "<http://mysite.com/ui/age>");
//! ```

mod parser;
mod pattern;

pub use parser::parse_rules;
pub use pattern::WildcardPattern;

use crate::curie::PrefixTable;
use crate::literal::LiteralKind;
use indexmap::IndexMap;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Language tag used when a rules file has no `@language` directive
pub const DEFAULT_LANGUAGE: &str = "en";

/// Rules errors
#[derive(Error, Debug)]
pub enum RulesError {
    /// IO error while reading a rules file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RulesResult<T> = Result<T, RulesError>;

/// Explicit rule for one predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateRule {
    /// Predicate CURIE as written in the rules file
    pub curie: String,
    /// Declared kind
    pub kind: LiteralKind,
    /// `lang` modifier: objects carry the ruleset language tag
    pub localized: bool,
    /// `many` modifier: the predicate may repeat on a subject
    pub many: bool,
}

impl PredicateRule {
    pub fn new(curie: impl Into<String>, kind: LiteralKind) -> Self {
        Self {
            curie: curie.into(),
            kind,
            localized: false,
            many: false,
        }
    }

    /// True for `localized` rules and for rules with the `lang` modifier
    pub fn is_localized(&self) -> bool {
        self.kind == LiteralKind::Localized || self.localized
    }
}

/// Convention rule assigning a kind to every predicate matching a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultRule {
    pub kind: LiteralKind,
    pub pattern: WildcardPattern,
}

impl DefaultRule {
    pub fn new(kind: LiteralKind, pattern: WildcardPattern) -> Self {
        Self { kind, pattern }
    }

    pub fn matches(&self, predicate: &str) -> bool {
        self.pattern.is_match(predicate)
    }
}

/// Parsed rules file
///
/// Built once and only read afterwards, so it can be shared freely between
/// enhancement calls and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    /// Language tag for localized literals
    pub language: String,
    /// Prefix table in file order
    pub prefixes: PrefixTable,
    /// Explicit predicate rules keyed by CURIE; the last declaration wins
    pub predicates: IndexMap<String, PredicateRule>,
    /// Default rules in file order
    pub defaults: Vec<DefaultRule>,
}

impl Ruleset {
    /// Create an empty ruleset with the default language
    pub fn new() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            prefixes: PrefixTable::new(),
            predicates: IndexMap::new(),
            defaults: Vec::new(),
        }
    }

    /// Parse a rules document. See [`parse_rules`].
    pub fn parse(content: &str) -> Self {
        parse_rules(content)
    }

    /// Read and parse a rules file
    pub fn from_file(path: impl AsRef<Path>) -> RulesResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        info!("Loaded rules file {:?}", path);
        Ok(parse_rules(&content))
    }

    /// Explicit rule for a predicate, if any
    pub fn predicate_rule(&self, predicate: &str) -> Option<&PredicateRule> {
        self.predicates.get(predicate)
    }

    /// Explicitly declared kind for a predicate, if any
    pub fn predicate_kind(&self, predicate: &str) -> Option<LiteralKind> {
        self.predicate_rule(predicate).map(|rule| rule.kind)
    }

    /// Whether any default rule of `kind` matches the predicate
    pub fn matches_default(&self, kind: LiteralKind, predicate: &str) -> bool {
        self.defaults
            .iter()
            .filter(|rule| rule.kind == kind)
            .any(|rule| rule.matches(predicate))
    }

    /// Whether the predicate was declared with the `many` modifier
    pub fn is_many(&self, predicate: &str) -> bool {
        self.predicate_rule(predicate).is_some_and(|rule| rule.many)
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::new()
    }
}
