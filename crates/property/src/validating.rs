//! A string property guarded by a validator.

use std::fmt;
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use verity_validator::foundation::{BoxValidator, Decision, Outcome, Validate, ValidationError};

use crate::property::{Link, MutableProperty, Observable, Property};

/// The latest decision of a [`ValidatingProperty`], with the value it
/// concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The value was accepted as proposed.
    Valid(Option<String>),
    /// The proposal was replaced by `replacement`.
    Coerced {
        replacement: Option<String>,
        error: ValidationError,
    },
    /// The proposal was stored but rejected.
    Invalid {
        value: Option<String>,
        error: ValidationError,
    },
}

impl ValidationResult {
    /// Only `Valid` counts; a coerced value still carries an error.
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub const fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid(_) => None,
            Self::Coerced { error, .. } | Self::Invalid { error, .. } => Some(error),
        }
    }

    /// The rendered error, if any.
    pub fn message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}

/// The value to store for `proposed` under `decision`, and the result.
fn settle(proposed: Option<String>, decision: Decision) -> (Option<String>, ValidationResult) {
    match decision {
        Outcome::Valid => (proposed.clone(), ValidationResult::Valid(proposed)),
        Outcome::Coerced(replacement, error) => (
            replacement.clone(),
            ValidationResult::Coerced { replacement, error },
        ),
        Outcome::Invalid(error) => (
            proposed.clone(),
            ValidationResult::Invalid {
                value: proposed,
                error,
            },
        ),
    }
}

struct Inner {
    value: MutableProperty<Option<String>>,
    result: MutableProperty<ValidationResult>,
    validator: BoxValidator,
    links: Mutex<Vec<Link>>,
}

impl Inner {
    fn apply(&self, proposed: Option<String>) -> ValidationResult {
        let decision = self.validator.validate(proposed.as_deref());
        tracing::trace!(
            present = proposed.is_some(),
            valid = decision.is_valid(),
            coerced = decision.is_coerced(),
            "validated property value"
        );

        let (stored, result) = settle(proposed, decision);

        if !result.is_valid() && self.result.value().is_valid() {
            tracing::debug!(error = ?result.message(), "property became invalid");
        }

        // Result first, so observers of the value see the matching decision.
        self.result.set(result.clone());
        self.value.set(stored);
        result
    }
}

/// A `MutableProperty<Option<String>>` that runs a validator on every write.
///
/// - `Valid` stores the proposed value.
/// - `Coerced(v, e)` stores `v`.
/// - `Invalid(e)` stores the proposed value and records `e`.
///
/// The initial value is validated on construction. Cloning shares state.
#[derive(Clone)]
pub struct ValidatingProperty {
    inner: Arc<Inner>,
}

impl ValidatingProperty {
    pub fn new(initial: Option<String>, validator: impl Validate + 'static) -> Self {
        let validator = validator.boxed();
        let decision = validator.validate(initial.as_deref());
        let (stored, result) = settle(initial, decision);

        Self {
            inner: Arc::new(Inner {
                value: MutableProperty::new(stored),
                result: MutableProperty::new(result),
                validator,
                links: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Proposes a new value and returns the decision.
    pub fn set(&self, value: Option<String>) -> ValidationResult {
        self.inner.apply(value)
    }

    /// Runs the validator again on the stored value.
    pub fn revalidate(&self) -> ValidationResult {
        self.inner.apply(self.inner.value.value())
    }

    /// Revalidates whenever `other` changes, for as long as `self` lives.
    ///
    /// Use it when the validator reads another property, as
    /// [`crate::rules::equals`] does.
    pub fn revalidate_when<O: Observable>(&self, other: &O) {
        let weak: Weak<Inner> = Arc::downgrade(&self.inner);
        let link = other.as_property().link(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.apply(inner.value.value());
            }
        });
        self.inner.links.lock().push(link);
    }

    /// The latest decision.
    pub fn result(&self) -> Property<ValidationResult> {
        self.inner.result.as_property()
    }

    /// `true` unless the latest decision is `Valid`.
    pub fn has_errors(&self) -> Property<bool> {
        self.result().map(|result| !result.is_valid())
    }

    /// The rendered error of the latest decision.
    pub fn error_message(&self) -> Property<Option<String>> {
        self.result().map(ValidationResult::message)
    }

    pub fn validator(&self) -> &BoxValidator {
        &self.inner.validator
    }
}

impl Observable for ValidatingProperty {
    type Value = Option<String>;

    fn as_property(&self) -> Property<Option<String>> {
        self.inner.value.as_property()
    }
}

impl fmt::Debug for ValidatingProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatingProperty")
            .field("value", &self.inner.value.value())
            .field("result", &self.inner.result.value())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use verity_validator::combine;
    use verity_validator::foundation::from_fn;
    use verity_validator::rules::{max_length, min_length, required};

    fn password() -> ValidatingProperty {
        ValidatingProperty::new(None, combine![required(), min_length(8), max_length(32)])
    }

    #[test]
    fn initial_value_is_validated() {
        let property = password();
        assert_eq!(
            property.result().value(),
            ValidationResult::Invalid {
                value: None,
                error: ValidationError::Required { tag: None }
            }
        );
        assert!(property.has_errors().value());
    }

    #[test]
    fn invalid_value_is_still_stored() {
        let property = password();
        let result = property.set(Some("short".into()));
        assert_eq!(property.value(), Some("short".to_string()));
        assert_eq!(
            result.message(),
            Some("must be at least 8 characters long".to_string())
        );
        assert_eq!(property.error_message().value(), result.message());
    }

    #[test]
    fn valid_value_clears_errors() {
        let property = password();
        let has_errors = property.has_errors();
        property.set(Some("long enough".into()));
        assert!(!has_errors.value());
        assert_eq!(property.error_message().value(), None);
    }

    #[test]
    fn coerced_value_is_replaced() {
        let trim = from_fn(|value: Option<&str>| match value {
            Some(v) if v.trim() != v => Outcome::Coerced(
                Some(v.trim().to_string()),
                ValidationError::NotSpecified { tag: None },
            ),
            _ => Outcome::Valid,
        });
        let property = ValidatingProperty::new(None, trim);

        let result = property.set(Some("  padded ".into()));
        assert_eq!(property.value(), Some("padded".to_string()));
        assert!(!result.is_valid());
        assert!(property.has_errors().value());
    }
}
