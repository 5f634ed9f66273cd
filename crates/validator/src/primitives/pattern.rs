//! Whole-string regular expression matching.

use std::fmt;

use regex::Regex;

/// A regex that must match the entire input.
///
/// The pattern is checked on its own, then wrapped as `^(?:pattern)$` and
/// compiled once. A pattern that fails to compile is kept along with its
/// error and matches nothing.
#[derive(Debug, Clone)]
pub struct FullMatch {
    source: String,
    compiled: Result<Regex, regex::Error>,
}

impl FullMatch {
    /// Compiles `pattern` anchored at both ends.
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        let source = pattern.into();
        // Unbalanced groups can compile once wrapped and lose the anchors.
        let compiled = Regex::new(&source).and_then(|_| Regex::new(&format!("^(?:{source})$")));
        Self { source, compiled }
    }

    /// The pattern as given, without anchors.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compile error, if the pattern was malformed.
    #[must_use]
    pub fn compile_error(&self) -> Option<&regex::Error> {
        self.compiled.as_ref().err()
    }

    /// `value` matches the pattern from start to end.
    #[must_use]
    pub fn is_match(&self, value: &str) -> bool {
        self.compiled
            .as_ref()
            .is_ok_and(|regex| regex.is_match(value))
    }
}

impl PartialEq for FullMatch {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for FullMatch {}

impl fmt::Display for FullMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
