//! Literal kinds for predicate objects
//!
//! A rules file assigns each predicate one of a closed set of kinds. The kind
//! decides how an object value is rendered as an N-Triples term.

use oxrdf::Literal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:anyURI IRI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// Datatype placeholder for kinds encoded without a datatype IRI
pub const UNKNOWN_DATATYPE: &str = "unknown";

/// Kind of value carried by a predicate's object
///
/// `Localized`, `Iri` and `Unknown` have no XSD datatype: localized values
/// carry a language tag, IRIs are bracketed, and unknown values are quoted
/// as plain strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiteralKind {
    Str,
    Localized,
    Int,
    Number,
    Float,
    Bool,
    DateTime,
    Date,
    AnyUri,
    Iri,
    Unknown,
}

impl LiteralKind {
    /// Map a rules-file keyword to a kind. Unrecognized keywords yield `Unknown`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "string" => LiteralKind::Str,
            "localized" => LiteralKind::Localized,
            "integer" | "int" => LiteralKind::Int,
            "float" => LiteralKind::Float,
            "number" => LiteralKind::Number,
            "boolean" => LiteralKind::Bool,
            "datetime" => LiteralKind::DateTime,
            "date" => LiteralKind::Date,
            "uri" => LiteralKind::AnyUri,
            "iri" => LiteralKind::Iri,
            _ => LiteralKind::Unknown,
        }
    }

    /// Canonical XSD datatype IRI, or [`UNKNOWN_DATATYPE`] for kinds without one
    pub fn datatype_iri(&self) -> &'static str {
        match self {
            LiteralKind::Str => xsd::STRING,
            LiteralKind::Int => xsd::INTEGER,
            LiteralKind::Float => xsd::FLOAT,
            LiteralKind::Bool => xsd::BOOLEAN,
            LiteralKind::DateTime => xsd::DATE_TIME,
            LiteralKind::Date => xsd::DATE,
            LiteralKind::AnyUri => xsd::ANY_URI,
            LiteralKind::Number
            | LiteralKind::Localized
            | LiteralKind::Iri
            | LiteralKind::Unknown => UNKNOWN_DATATYPE,
        }
    }

    /// Keyword used for this kind in a rules file
    pub fn as_token(&self) -> &'static str {
        match self {
            LiteralKind::Str => "string",
            LiteralKind::Localized => "localized",
            LiteralKind::Int => "integer",
            LiteralKind::Number => "number",
            LiteralKind::Float => "float",
            LiteralKind::Bool => "boolean",
            LiteralKind::DateTime => "datetime",
            LiteralKind::Date => "date",
            LiteralKind::AnyUri => "uri",
            LiteralKind::Iri => "iri",
            LiteralKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

/// Free-function form of [`LiteralKind::from_token`]
pub fn kind_from_token(token: &str) -> LiteralKind {
    LiteralKind::from_token(token)
}

/// Quote a value as an N-Triples string literal, escaping its content
pub fn quote(value: &str) -> String {
    Literal::new_simple_literal(value).to_string()
}

/// Quote a value with a language tag: `"value"@tag`
pub fn quote_localized(value: &str, language: &str) -> String {
    Literal::new_language_tagged_literal_unchecked(value, language).to_string()
}

/// Quote a value with the datatype of `kind`: `"value"^^<datatype>`
///
/// The lexical form of `value` is not validated.
pub fn quote_typed(kind: LiteralKind, value: &str) -> String {
    format!("{}^^<{}>", quote(value), kind.datatype_iri())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token() {
        assert_eq!(LiteralKind::from_token("string"), LiteralKind::Str);
        assert_eq!(LiteralKind::from_token("localized"), LiteralKind::Localized);
        assert_eq!(LiteralKind::from_token("integer"), LiteralKind::Int);
        assert_eq!(LiteralKind::from_token("int"), LiteralKind::Int);
        assert_eq!(LiteralKind::from_token("float"), LiteralKind::Float);
        assert_eq!(LiteralKind::from_token("number"), LiteralKind::Number);
        assert_eq!(LiteralKind::from_token("boolean"), LiteralKind::Bool);
        assert_eq!(LiteralKind::from_token("datetime"), LiteralKind::DateTime);
        assert_eq!(LiteralKind::from_token("date"), LiteralKind::Date);
        assert_eq!(LiteralKind::from_token("uri"), LiteralKind::AnyUri);
        assert_eq!(LiteralKind::from_token("iri"), LiteralKind::Iri);
    }

    #[test]
    fn test_unrecognized_token() {
        assert_eq!(kind_from_token("String"), LiteralKind::Unknown);
        assert_eq!(kind_from_token(""), LiteralKind::Unknown);
        assert_eq!(kind_from_token("decimal"), LiteralKind::Unknown);
    }

    #[test]
    fn test_datatype_iri() {
        assert_eq!(LiteralKind::Str.datatype_iri(), xsd::STRING);
        assert_eq!(
            LiteralKind::DateTime.datatype_iri(),
            "http://www.w3.org/2001/XMLSchema#dateTime"
        );
        assert_eq!(LiteralKind::AnyUri.datatype_iri(), xsd::ANY_URI);
        assert_eq!(LiteralKind::Localized.datatype_iri(), UNKNOWN_DATATYPE);
        assert_eq!(LiteralKind::Iri.datatype_iri(), UNKNOWN_DATATYPE);
        assert_eq!(LiteralKind::Unknown.datatype_iri(), UNKNOWN_DATATYPE);
    }

    #[test]
    fn test_quote_typed() {
        assert_eq!(
            quote_typed(LiteralKind::Int, "42"),
            "\"42\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        assert_eq!(
            quote_typed(LiteralKind::Str, "a"),
            "\"a\"^^<http://www.w3.org/2001/XMLSchema#string>"
        );
    }

    #[test]
    fn test_quote_escapes_content() {
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote("line\nbreak"), "\"line\\nbreak\"");
    }

    #[test]
    fn test_quote_localized() {
        assert_eq!(quote_localized("hello", "en-GB"), "\"hello\"@en-GB");
    }

    #[test]
    fn test_token_round_trip() {
        for kind in [
            LiteralKind::Str,
            LiteralKind::Localized,
            LiteralKind::Int,
            LiteralKind::Number,
            LiteralKind::Float,
            LiteralKind::Bool,
            LiteralKind::DateTime,
            LiteralKind::Date,
            LiteralKind::AnyUri,
            LiteralKind::Iri,
        ] {
            assert_eq!(LiteralKind::from_token(kind.as_token()), kind);
        }
    }
}
