//! Conversion run configuration

use std::path::PathBuf;

/// What to do with a triple whose timestamp cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InvalidPolicy {
    /// Stop at the first invalid triple
    Fail,
    /// Log the triple and continue
    Skip,
}

/// Output encoding for converted triples
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TripleFormat {
    /// `subject predicate object .` lines
    Ntriples,
    /// One JSON record per line
    Json,
}

/// Conversion run configuration
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Rules file
    pub rules: PathBuf,
    /// JSON-lines triple input (None = stdin)
    pub input: Option<PathBuf>,
    /// Output file (None = stdout)
    pub output: Option<PathBuf>,
    /// Invalid timestamp handling
    pub on_invalid: InvalidPolicy,
    /// Enhance on the rayon thread pool
    pub parallel: bool,
    /// Output encoding
    pub format: TripleFormat,
}

impl RunConfig {
    /// Configuration with defaults for everything but the rules file
    pub fn new(rules: impl Into<PathBuf>) -> Self {
        Self {
            rules: rules.into(),
            input: None,
            output: None,
            on_invalid: InvalidPolicy::Fail,
            parallel: false,
            format: TripleFormat::Ntriples,
        }
    }
}

/// Treat `-` as the standard stream
pub fn stream_path(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| p.as_os_str() != "-")
}
