//! Folding a list of validators into one
//!
//! [`Combined`] runs every validator against the same input and folds the
//! outcomes left to right with [`Outcome::combine`], seeded with `Valid`.
//! Evaluation never short-circuits; only the merge does, so the first
//! failing validator in the list determines the reported error.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let password = combine![required(), min_length(8), max_length(32)];
//!
//! assert!(password.validate(Some("a-valid-password")).is_valid());
//! assert_eq!(
//!     password.validate(Some("short")).error().map(ValidationError::code),
//!     Some("min_length"),
//! );
//! assert_eq!(
//!     password.validate(None).error().map(ValidationError::code),
//!     Some("required"),
//! );
//! ```

use crate::foundation::{Decision, Outcome, Validate};

/// An ordered list of validators applied as one.
#[derive(Debug, Clone)]
pub struct Combined<V> {
    validators: Vec<V>,
}

impl<V> Combined<V> {
    /// Wraps `validators`, keeping their order.
    pub fn new(validators: Vec<V>) -> Self {
        Self { validators }
    }

    /// Appends another validator.
    #[must_use]
    pub fn push(mut self, validator: V) -> Self {
        self.validators.push(validator);
        self
    }

    /// The validators, in evaluation order.
    pub fn validators(&self) -> &[V] {
        &self.validators
    }

    /// Number of validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// `true` when there is nothing to run; such a list always passes.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl<V> Default for Combined<V> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<V: Validate> Validate for Combined<V> {
    fn validate(&self, input: Option<&str>) -> Decision {
        let decision: Decision = self
            .validators
            .iter()
            .map(|validator| validator.validate(input))
            .sum();

        tracing::trace!(
            validators = self.validators.len(),
            valid = decision.is_valid(),
            code = decision.error().map(|e| e.code()),
            "combined validation"
        );
        decision
    }
}

impl<V> FromIterator<V> for Combined<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<V> Extend<V> for Combined<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.validators.extend(iter);
    }
}

/// Combines `validators` into one, preserving order.
///
/// An empty list yields a validator that always returns `Valid`.
pub fn combine<V, I>(validators: I) -> Combined<V>
where
    V: Validate,
    I: IntoIterator<Item = V>,
{
    validators.into_iter().collect()
}

/// Folds precomputed outcomes the same way [`Combined`] does.
pub fn fold<I>(outcomes: I) -> Decision
where
    I: IntoIterator<Item = Decision>,
{
    outcomes.into_iter().fold(Outcome::Valid, Outcome::combine)
}
