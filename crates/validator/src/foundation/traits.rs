//! Core traits for the validation system
//!
//! Every validator in this crate looks at one optional string and returns a
//! [`Decision`]. Absent input (`None`) is a first-class case: each rule
//! decides for itself whether "nothing" passes.

use std::sync::Arc;

use crate::combinators::{And, Tagged};
use crate::foundation::{BoxValidator, Decision, StringConvertible};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A pure function from an optional string to a [`Decision`].
///
/// Implementations must be stateless with respect to the input: calling
/// `validate` twice with the same value gives the same decision, and
/// concurrent calls are safe.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::foundation::{Decision, Outcome, Validate, ValidationError};
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     fn validate(&self, input: Option<&str>) -> Decision {
///         match input {
///             Some(s) if !s.trim().is_empty() => Outcome::Valid,
///             _ => Outcome::Invalid(ValidationError::Required { tag: None }),
///         }
///     }
/// }
///
/// assert!(NotBlank.apply(Some("hello")).is_valid());
/// assert!(NotBlank.apply(Some(&42)).is_valid());
/// assert!(NotBlank.validate(None).is_invalid());
/// ```
pub trait Validate: Send + Sync {
    /// Validates `input`, which is `None` when the value is absent.
    fn validate(&self, input: Option<&str>) -> Decision;

    /// Validates anything that renders to a string.
    fn apply<S>(&self, value: Option<&S>) -> Decision
    where
        Self: Sized,
        S: StringConvertible + ?Sized,
    {
        let rendered = value.map(StringConvertible::to_validatable);
        self.validate(rendered.as_deref())
    }

    /// Erases the validator's type.
    fn boxed(self) -> BoxValidator
    where
        Self: Sized + 'static,
    {
        BoxValidator::new(self)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    #[inline]
    fn validate(&self, input: Option<&str>) -> Decision {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    #[inline]
    fn validate(&self, input: Option<&str>) -> Decision {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    #[inline]
    fn validate(&self, input: Option<&str>) -> Decision {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods available on every validator.
pub trait ValidateExt: Validate + Sized {
    /// Runs both validators and merges their outcomes with
    /// [`Outcome::combine`](crate::foundation::Outcome::combine).
    ///
    /// ```rust,ignore
    /// let password = required().and(min_length(8)).and(max_length(32));
    /// assert!(password.validate(Some("short")).is_invalid());
    /// ```
    fn and<V: Validate>(self, other: V) -> And<Self, V> {
        And::new(self, other)
    }

    /// Attaches `tag` to every error this validator produces, replacing
    /// whatever tag the error carried.
    fn with_tag(self, tag: impl Into<String>) -> Tagged<Self> {
        Tagged::new(self, tag)
    }
}

impl<T: Validate> ValidateExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Outcome, ValidationError};

    struct NonEmpty;

    impl Validate for NonEmpty {
        fn validate(&self, input: Option<&str>) -> Decision {
            match input {
                Some(s) if !s.is_empty() => Outcome::Valid,
                _ => Outcome::Invalid(ValidationError::Required { tag: None }),
            }
        }
    }

    #[test]
    fn apply_renders_scalars() {
        assert!(NonEmpty.apply(Some(&7_u32)).is_valid());
        assert!(NonEmpty.apply(Some("")).is_invalid());
        assert!(NonEmpty.apply::<str>(None).is_invalid());
    }

    #[test]
    fn smart_pointers_delegate() {
        let boxed: Box<dyn Validate> = Box::new(NonEmpty);
        let shared = Arc::new(NonEmpty);
        assert!(boxed.validate(Some("x")).is_valid());
        assert!(shared.validate(None).is_invalid());
        assert!((&NonEmpty).validate(Some("y")).is_valid());
    }
}
