//! Literal kind resolution
//!
//! Localization and IRI-ness are structural: they can come from an explicit
//! rule or from a default pattern, and either source outranks any other
//! explicit kind. Remaining predicates use their explicit kind, or fall back
//! to an untyped string.

use crate::literal::LiteralKind;
use crate::rules::Ruleset;
use tracing::debug;

/// Effective literal kind for a predicate
pub fn resolve(ruleset: &Ruleset, predicate: &str) -> LiteralKind {
    let kind = if ruleset.is_localized(predicate) {
        LiteralKind::Localized
    } else if ruleset.is_iri(predicate) {
        LiteralKind::Iri
    } else {
        ruleset.predicate_kind(predicate).unwrap_or(LiteralKind::Str)
    };

    debug!("Resolved {} as {}", predicate, kind);
    kind
}

impl Ruleset {
    /// Effective literal kind for a predicate. See [`resolve`].
    pub fn resolve(&self, predicate: &str) -> LiteralKind {
        resolve(self, predicate)
    }

    /// Localized by explicit rule, `lang` modifier or default pattern
    pub fn is_localized(&self, predicate: &str) -> bool {
        self.predicate_rule(predicate)
            .is_some_and(|rule| rule.is_localized())
            || self.matches_default(LiteralKind::Localized, predicate)
    }

    /// IRI-valued by explicit rule or default pattern
    pub fn is_iri(&self, predicate: &str) -> bool {
        self.predicate_kind(predicate) == Some(LiteralKind::Iri)
            || self.matches_default(LiteralKind::Iri, predicate)
    }

    /// Explicit `string` predicates and predicates with no rule at all
    pub fn is_string(&self, predicate: &str) -> bool {
        match self.predicate_kind(predicate) {
            Some(kind) => kind == LiteralKind::Str,
            None => true,
        }
    }

    /// Whether the predicate is explicitly declared with `kind`
    pub fn match_literal(&self, kind: LiteralKind, predicate: &str) -> bool {
        self.predicate_kind(predicate) == Some(kind)
    }
}
