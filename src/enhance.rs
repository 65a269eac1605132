//! Triple enhancement
//!
//! Rewrites raw triples into N-Triples terms: the object becomes a quoted,
//! typed or language-tagged literal (or a bracketed IRI) according to its
//! predicate's kind, and the subject and predicate are expanded to IRIs.

use crate::literal::{quote, quote_localized, quote_typed, LiteralKind};
use crate::rules::Ruleset;
use crate::timestamp::{self, TimestampError};
use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());

static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap()
});

/// Enhancement errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnhanceError {
    /// Object of a `datetime` or `date` predicate is not a timestamp
    #[error("Invalid timestamp {value:?} for predicate {predicate}")]
    InvalidTimestamp { predicate: String, value: String },
}

pub type EnhanceResult<T> = Result<T, EnhanceError>;

/// Subject-predicate-object record
///
/// Raw triples hold CURIEs and plain values; enhanced triples hold N-Triples
/// terms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    /// Create a new triple
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// Batch enhancement options
#[derive(Debug, Clone, Default)]
pub struct EnhanceOptions {
    /// Enhance batches on the rayon thread pool
    pub parallel: bool,
}

/// Enhance a single triple
pub fn enhance_triple(ruleset: &Ruleset, triple: &Triple) -> EnhanceResult<Triple> {
    let kind = ruleset.resolve(&triple.predicate);
    let object = rewrite_object(ruleset, kind, triple)?;

    Ok(Triple {
        subject: ruleset.prefixes.inflate(&triple.subject),
        predicate: ruleset.prefixes.inflate(&triple.predicate),
        object,
    })
}

/// Build a reusable transform bound to `ruleset`
pub fn enhance(ruleset: &Ruleset) -> impl Fn(&Triple) -> EnhanceResult<Triple> + Send + Sync + '_ {
    move |triple| enhance_triple(ruleset, triple)
}

/// Enhance every triple, one result per input in input order
pub fn enhance_all(ruleset: &Ruleset, triples: &[Triple]) -> Vec<EnhanceResult<Triple>> {
    triples.iter().map(enhance(ruleset)).collect()
}

/// Parallel [`enhance_all`]; output order still matches input order
pub fn par_enhance_all(ruleset: &Ruleset, triples: &[Triple]) -> Vec<EnhanceResult<Triple>> {
    triples.par_iter().map(enhance(ruleset)).collect()
}

/// [`enhance_all`] or [`par_enhance_all`] depending on `options`
pub fn enhance_batch(
    ruleset: &Ruleset,
    triples: &[Triple],
    options: &EnhanceOptions,
) -> Vec<EnhanceResult<Triple>> {
    if options.parallel {
        par_enhance_all(ruleset, triples)
    } else {
        enhance_all(ruleset, triples)
    }
}

fn rewrite_object(ruleset: &Ruleset, kind: LiteralKind, triple: &Triple) -> EnhanceResult<String> {
    let value = triple.object.as_str();

    let object = match kind {
        LiteralKind::Str | LiteralKind::AnyUri | LiteralKind::Number | LiteralKind::Unknown => {
            quote(value)
        }
        LiteralKind::Localized => quote_localized(value, &ruleset.language),
        LiteralKind::Int => quote_typed(kind, &parse_integer(value)),
        LiteralKind::Float => quote_typed(kind, &parse_float(value)),
        LiteralKind::Bool => quote_typed(kind, if value == "true" { "true" } else { "false" }),
        LiteralKind::DateTime => {
            let normalized = timestamp::normalize(value).map_err(|e| invalid(triple, e))?;
            quote_typed(kind, &normalized)
        }
        LiteralKind::Date => {
            let normalized = timestamp::normalize_date(value).map_err(|e| invalid(triple, e))?;
            quote_typed(kind, &normalized)
        }
        LiteralKind::Iri => ruleset.prefixes.inflate(value),
    };

    Ok(object)
}

fn invalid(triple: &Triple, _: TimestampError) -> EnhanceError {
    EnhanceError::InvalidTimestamp {
        predicate: triple.predicate.clone(),
        value: triple.object.clone(),
    }
}

/// Leading base-10 integer of `value` in canonical lexical form, or "0".
///
/// The digits are kept as text, so values past the range of `i64` survive
/// unchanged (xsd:integer is unbounded).
fn parse_integer(value: &str) -> String {
    let Some(caps) = LEADING_INTEGER.captures(value) else {
        return "0".to_string();
    };

    let matched = &caps[1];
    let (negative, digits) = match matched.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, matched.strip_prefix('+').unwrap_or(matched)),
    };

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        "0".to_string()
    } else if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    }
}

/// Leading floating-point number of `value`, or "0". Overflow saturates to
/// the xsd:float infinities `INF` / `-INF`.
fn parse_float(value: &str) -> String {
    let number = LEADING_FLOAT
        .captures(value)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .unwrap_or(0.0);

    match number {
        f if f == f64::INFINITY => "INF".to_string(),
        f if f == f64::NEG_INFINITY => "-INF".to_string(),
        f => f.to_string(),
    }
}
