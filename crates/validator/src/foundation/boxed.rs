//! Type-erased and closure-backed validators.

use std::fmt;
use std::sync::Arc;

use crate::combinators::combine;
use crate::foundation::{Decision, Validate};

// ============================================================================
// FN VALIDATOR
// ============================================================================

/// A validator backed by a closure.
#[derive(Clone)]
pub struct FnValidator<F> {
    f: F,
}

impl<F> FnValidator<F>
where
    F: Fn(Option<&str>) -> Decision + Send + Sync,
{
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator").finish_non_exhaustive()
    }
}

impl<F> Validate for FnValidator<F>
where
    F: Fn(Option<&str>) -> Decision + Send + Sync,
{
    #[inline]
    fn validate(&self, input: Option<&str>) -> Decision {
        (self.f)(input)
    }
}

/// Creates a validator from a closure.
pub fn from_fn<F>(f: F) -> FnValidator<F>
where
    F: Fn(Option<&str>) -> Decision + Send + Sync,
{
    FnValidator::new(f)
}

// ============================================================================
// BOX VALIDATOR
// ============================================================================

/// A cloneable, type-erased validator.
///
/// Clones share the same underlying validator. This is the currency type for
/// heterogeneous lists, rule configuration and property bindings.
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let email = BoxValidator::new(is_email().tag("email"));
/// let filled = BoxValidator::from_fn(|input| match input {
///     Some(_) => Outcome::Valid,
///     None => Outcome::Invalid(ValidationError::Required { tag: None }),
/// });
/// let both = filled.combine_with(&email);
/// assert!(both.validate(Some("a@b.com")).is_valid());
/// ```
#[derive(Clone)]
pub struct BoxValidator {
    inner: Arc<dyn Validate>,
}

impl BoxValidator {
    /// Boxes `validator`.
    pub fn new<V: Validate + 'static>(validator: V) -> Self {
        Self {
            inner: Arc::new(validator),
        }
    }

    /// Boxes a closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(Option<&str>) -> Decision + Send + Sync + 'static,
    {
        Self::new(FnValidator::new(f))
    }

    /// A validator that runs `self` then `other` and merges the outcomes.
    #[must_use]
    pub fn combine_with(&self, other: &Self) -> Self {
        combine([self.clone(), other.clone()]).boxed()
    }
}

impl fmt::Debug for BoxValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxValidator").finish_non_exhaustive()
    }
}

impl Validate for BoxValidator {
    #[inline]
    fn validate(&self, input: Option<&str>) -> Decision {
        self.inner.validate(input)
    }

    fn boxed(self) -> BoxValidator {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Outcome, ValidationError};

    fn reject(code: &'static str) -> BoxValidator {
        BoxValidator::from_fn(move |_| {
            Outcome::Invalid(ValidationError::NotSpecified {
                tag: Some(code.to_string()),
            })
        })
    }

    #[test]
    fn from_fn_runs_closure() {
        let echo = from_fn(|input: Option<&str>| match input {
            Some("ok") => Outcome::Valid,
            _ => Outcome::Invalid(ValidationError::default()),
        });
        assert!(echo.validate(Some("ok")).is_valid());
        assert!(echo.validate(Some("no")).is_invalid());
    }

    #[test]
    fn combine_with_keeps_first_failure() {
        let first = reject("first");
        let second = reject("second");
        let decision = first.combine_with(&second).validate(Some("x"));
        assert_eq!(decision.error().and_then(ValidationError::tag), Some("first"));
    }

    #[test]
    fn clones_share_validator() {
        let original = reject("shared");
        let copy = original.clone();
        assert_eq!(original.validate(None), copy.validate(None));
    }

    #[test]
    fn boxing_a_box_is_identity() {
        let boxed = reject("x");
        let again = boxed.clone().boxed();
        assert!(Arc::ptr_eq(&boxed.inner, &again.inner));
    }
}
