//! Printable decisions.

use std::fmt;

use serde::Serialize;
use verity_validator::foundation::{Decision, Outcome, ValidationError};

/// One decision, ready for text or JSON output.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'a str>,
    pub outcome: &'static str,
    pub value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacement: Option<Option<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'a ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<'a> Report<'a> {
    pub fn new(field: Option<&'a str>, value: Option<&'a str>, decision: &'a Decision) -> Self {
        let (outcome, replacement) = match decision {
            Outcome::Valid => ("valid", None),
            Outcome::Coerced(replacement, _) => ("coerced", Some(replacement.as_deref())),
            Outcome::Invalid(_) => ("invalid", None),
        };
        let error = decision.error();
        Self {
            field,
            outcome,
            value,
            replacement,
            error,
            message: error.map(ToString::to_string),
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.outcome == "invalid"
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = self.field {
            write!(f, "{field}: ")?;
        }
        f.write_str(self.outcome)?;
        if let Some(replacement) = self.replacement {
            match replacement {
                Some(value) => write!(f, " to \"{value}\"")?,
                None => f.write_str(" to nothing")?,
            }
        }
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}
