//! Wildcard predicate patterns
//!
//! `*` matches a single path segment, `**` matches one or more segments.
//! Patterns are compiled once, when the rules are parsed.

use regex::Regex;
use std::fmt;

/// Compiled wildcard pattern
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    regex: Regex,
}

impl WildcardPattern {
    /// Compile a wildcard pattern
    ///
    /// Literal text is escaped, so `.` or `#` in a CURIE match themselves.
    /// The regex is anchored at the start only: trailing segments may follow.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&Self::translate(pattern))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Regex source for a wildcard pattern
    pub fn translate(pattern: &str) -> String {
        let body = pattern
            .split("**")
            .map(|part| {
                part.split('*')
                    .map(regex::escape)
                    .collect::<Vec<_>>()
                    .join("[^/]+")
            })
            .collect::<Vec<_>>()
            .join(".+");
        format!("^{}", body)
    }

    /// Test a predicate CURIE against this pattern
    pub fn is_match(&self, predicate: &str) -> bool {
        self.regex.is_match(predicate)
    }

    /// Pattern as written in the rules file
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl PartialEq for WildcardPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for WildcardPattern {}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
