//! CURIE prefix management
//!
//! Expands compact `prefix:suffix` identifiers into bracketed IRIs and
//! compacts IRIs back. The table is ordered: lookups scan it front to back and
//! the first matching entry wins.

use serde::{Deserialize, Serialize};

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Ordered prefix table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTable {
    namespaces: Vec<Namespace>,
}

impl PrefixTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a prefix. Earlier entries shadow later ones with the same prefix.
    pub fn push(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.namespaces.push(Namespace::new(prefix, iri));
    }

    /// First namespace registered for `prefix`
    pub fn get(&self, prefix: &str) -> Option<&Namespace> {
        self.namespaces.iter().find(|ns| ns.prefix == prefix)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces.iter()
    }

    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    /// Expand a CURIE into a bracketed IRI
    ///
    /// Only the first `prefix:` occurrence is replaced. Values with an unknown
    /// prefix pass through unresolved; the result is bracketed unless it
    /// already starts with `<`.
    pub fn inflate(&self, value: &str) -> String {
        let prefix = value.split(':').next().unwrap_or(value);

        let iri = match self.get(prefix) {
            Some(ns) => value.replacen(&format!("{}:", ns.prefix), &ns.iri, 1),
            None => value.to_string(),
        };

        if iri.starts_with('<') {
            iri
        } else {
            format!("<{}>", iri)
        }
    }

    /// Compact an IRI into a CURIE
    ///
    /// The first namespace IRI found anywhere inside `value` is replaced by its
    /// `prefix:`. Declaration order breaks ties, not match length.
    pub fn deflate(&self, value: &str) -> Option<String> {
        self.namespaces
            .iter()
            .map(|ns| value.replacen(&ns.iri, &format!("{}:", ns.prefix), 1))
            .find(|compact| compact != value)
    }
}

impl FromIterator<Namespace> for PrefixTable {
    fn from_iter<I: IntoIterator<Item = Namespace>>(iter: I) -> Self {
        Self {
            namespaces: iter.into_iter().collect(),
        }
    }
}

impl<P: Into<String>, I: Into<String>> FromIterator<(P, I)> for PrefixTable {
    fn from_iter<T: IntoIterator<Item = (P, I)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(prefix, iri)| Namespace::new(prefix, iri))
            .collect()
    }
}

/// Expand a CURIE using `prefixes`. See [`PrefixTable::inflate`].
pub fn inflate(prefixes: &PrefixTable, value: &str) -> String {
    prefixes.inflate(value)
}

/// Compact an IRI using `prefixes`. See [`PrefixTable::deflate`].
pub fn deflate(prefixes: &PrefixTable, value: &str) -> Option<String> {
    prefixes.deflate(value)
}
