//! AND combinator - two validators, one merged outcome
//!
//! This module provides the [`And`] combinator. Unlike a boolean AND it
//! never skips the right-hand validator: both run, and their outcomes are
//! merged with [`Outcome::combine`], so the left validator's failure wins.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::combinators::And;
//! use verity_validator::foundation::Validate;
//!
//! let validator = And::new(min_length(5), max_length(20));
//! assert!(validator.validate(Some("hello")).is_valid());
//! assert!(validator.validate(Some("hi")).is_invalid()); // fails min_length
//! ```

use crate::foundation::{Decision, Outcome, Validate};

/// Runs two validators and merges their outcomes.
///
/// # Type Parameters
///
/// * `L` - The left (first) validator type
/// * `R` - The right (second) validator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, input: Option<&str>) -> Decision {
        let left = self.left.validate(input);
        let right = self.right.validate(input);
        Outcome::combine(left, right)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate,
{
    And::new(left, right)
}
