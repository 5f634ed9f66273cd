//! Equality against a value that may change between validations.

use std::fmt;

use crate::foundation::{FieldTag, ValidationError};
use crate::rules::{Check, Rule};

/// Compares the input with whatever `source` returns at validation time,
/// falling back to `default` when the source is empty.
///
/// The watching flavour reports [`ValidationError::WatchEquals`] instead of
/// [`ValidationError::Equals`]; the check itself is the same.
#[derive(Clone)]
pub struct EqualsWith<F> {
    source: F,
    default: String,
    watching: bool,
}

impl<F> EqualsWith<F>
where
    F: Fn() -> Option<String> + Send + Sync,
{
    /// The value the input is currently compared with.
    pub fn expected(&self) -> String {
        (self.source)().unwrap_or_else(|| self.default.clone())
    }
}

impl<F> fmt::Debug for EqualsWith<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EqualsWith")
            .field("default", &self.default)
            .field("watching", &self.watching)
            .finish_non_exhaustive()
    }
}

impl<F> Check for EqualsWith<F>
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn check(&self, value: &str) -> bool {
        value == self.expected()
    }

    fn error(&self, tag: FieldTag) -> ValidationError {
        let expected = self.expected();
        if self.watching {
            ValidationError::WatchEquals { tag, expected }
        } else {
            ValidationError::Equals { tag, expected }
        }
    }
}

/// Equality with the current value of `source`, or `default`.
pub fn equals_with<F>(source: F, default: impl Into<String>) -> Rule<EqualsWith<F>>
where
    F: Fn() -> Option<String> + Send + Sync,
{
    Rule::new(EqualsWith {
        source,
        default: default.into(),
        watching: false,
    })
}

/// Like [`equals_with`], reporting [`ValidationError::WatchEquals`].
///
/// Use it for "confirm password" style fields whose reference value is
/// watched elsewhere.
pub fn watch_equals_with<F>(source: F, default: impl Into<String>) -> Rule<EqualsWith<F>>
where
    F: Fn() -> Option<String> + Send + Sync,
{
    Rule::new(EqualsWith {
        source,
        default: default.into(),
        watching: true,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::foundation::{Outcome, Validate};

    #[test]
    fn reads_source_at_validation_time() {
        let shared = Arc::new(Mutex::new(Some("first".to_string())));
        let rule = {
            let shared = shared.clone();
            equals_with(move || shared.lock().clone(), "fallback")
        };

        assert!(rule.validate(Some("first")).is_valid());
        *shared.lock() = Some("second".into());
        assert!(rule.validate(Some("first")).is_invalid());
        assert!(rule.validate(Some("second")).is_valid());
    }

    #[test]
    fn empty_source_uses_default() {
        let rule = equals_with(|| None, "fallback");
        assert!(rule.validate(Some("fallback")).is_valid());
        assert_eq!(
            rule.validate(Some("other")),
            Outcome::Invalid(ValidationError::Equals {
                tag: None,
                expected: "fallback".into()
            })
        );
    }

    #[test]
    fn watching_reports_watch_equals() {
        let rule = watch_equals_with(|| Some("secret".into()), "").tag("confirm");
        assert_eq!(
            rule.validate(Some("guess")),
            Outcome::Invalid(ValidationError::WatchEquals {
                tag: Some("confirm".into()),
                expected: "secret".into()
            })
        );
    }
}
