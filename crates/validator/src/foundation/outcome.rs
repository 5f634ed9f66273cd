//! Three-valued validation outcome and its combination operator.
//!
//! An [`Outcome`] is what one validator says about one input. Outcomes from
//! several validators are merged with [`Outcome::combine`] (also available as
//! `+`), which is associative and left-biased: the first `Invalid` wins and
//! is never replaced by a later rule.
//!
//! | a \ b        | Valid        | Coerced(v,e)  | Invalid(e)   |
//! |--------------|--------------|---------------|--------------|
//! | Valid        | Valid        | Coerced(v,e)  | Invalid(e)   |
//! | Coerced(v,e) | Coerced(v,e) | Coerced(a)    | Invalid(b)   |
//! | Invalid(e)   | Invalid(a)   | Invalid(a)    | Invalid(a)   |
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::foundation::Outcome;
//!
//! let a: Outcome<&str, &str> = Outcome::Invalid("too short");
//! let b = Outcome::Invalid("not an email");
//! assert_eq!(a + b, Outcome::Invalid("too short"));
//! ```

use std::iter::Sum;
use std::ops::Add;

use crate::foundation::ValidationError;

// ============================================================================
// OUTCOME
// ============================================================================

/// The result of applying one validation rule to one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "validation outcome must be checked"]
pub enum Outcome<T, E> {
    /// The input passed.
    Valid,
    /// The input was accepted after being replaced by `T`; `E` records why.
    Coerced(T, E),
    /// The input was rejected.
    Invalid(E),
}

/// Outcome produced by every string validator in this crate.
///
/// The coerced payload is the replacement value (itself possibly absent).
pub type Decision = Outcome<Option<String>, ValidationError>;

impl<T, E> Outcome<T, E> {
    /// Merges two outcomes, left to right.
    ///
    /// The first failure wins. A later `Coerced` never upgrades an earlier
    /// `Invalid`, and of two `Coerced` outcomes the left one is kept. A
    /// `Coerced` followed by an `Invalid` yields the right-hand `Invalid`.
    pub fn combine(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Invalid(error), _) => Self::Invalid(error),
            (Self::Valid, other) => other,
            (Self::Coerced(_, _), Self::Invalid(error)) => Self::Invalid(error),
            (coerced @ Self::Coerced(_, _), Self::Valid | Self::Coerced(_, _)) => coerced,
        }
    }

    /// Returns `true` for [`Outcome::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns `true` for [`Outcome::Coerced`].
    #[must_use]
    pub const fn is_coerced(&self) -> bool {
        matches!(self, Self::Coerced(_, _))
    }

    /// Returns `true` for [`Outcome::Invalid`].
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// The error carried by `Coerced` or `Invalid`.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Valid => None,
            Self::Coerced(_, error) | Self::Invalid(error) => Some(error),
        }
    }

    /// The replacement value of a `Coerced` outcome.
    #[must_use]
    pub const fn coerced_value(&self) -> Option<&T> {
        match self {
            Self::Coerced(value, _) => Some(value),
            _ => None,
        }
    }

    /// Transforms the coerced value, leaving `Valid` and `Invalid` as they are.
    pub fn map_value<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Valid => Outcome::Valid,
            Self::Coerced(value, error) => Outcome::Coerced(f(value), error),
            Self::Invalid(error) => Outcome::Invalid(error),
        }
    }

    /// Transforms the error of `Coerced` and `Invalid` outcomes.
    pub fn map_error<E2, F>(self, f: F) -> Outcome<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Valid => Outcome::Valid,
            Self::Coerced(value, error) => Outcome::Coerced(value, f(error)),
            Self::Invalid(error) => Outcome::Invalid(f(error)),
        }
    }

    /// Converts into a `Result`, treating coercion as success.
    ///
    /// `Valid` maps to `Ok(None)`, `Coerced(v, _)` to `Ok(Some(v))`.
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self {
            Self::Valid => Ok(None),
            Self::Coerced(value, _) => Ok(Some(value)),
            Self::Invalid(error) => Err(error),
        }
    }
}

impl<T, E> Default for Outcome<T, E> {
    fn default() -> Self {
        Self::Valid
    }
}

impl<T, E> Add for Outcome<T, E> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(rhs)
    }
}

/// Folds outcomes left to right, seeded with `Valid`.
impl<T, E> Sum for Outcome<T, E> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::Valid, Self::combine)
    }
}

impl<T, E> FromIterator<Self> for Outcome<T, E> {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        iter.into_iter().sum()
    }
}

impl<T, E> From<Result<(), E>> for Outcome<T, E> {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(error) => Self::Invalid(error),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    type O = Outcome<&'static str, &'static str>;

    #[test]
    fn valid_is_left_identity() {
        assert_eq!(O::Valid + O::Valid, O::Valid);
        assert_eq!(O::Valid + O::Coerced("v", "e"), O::Coerced("v", "e"));
        assert_eq!(O::Valid + O::Invalid("e"), O::Invalid("e"));
    }

    #[test]
    fn coerced_keeps_left_against_valid_and_coerced() {
        assert_eq!(O::Coerced("a", "ea") + O::Valid, O::Coerced("a", "ea"));
        assert_eq!(
            O::Coerced("a", "ea") + O::Coerced("b", "eb"),
            O::Coerced("a", "ea")
        );
    }

    #[test]
    fn coerced_then_invalid_takes_right_error() {
        assert_eq!(O::Coerced("a", "ea") + O::Invalid("eb"), O::Invalid("eb"));
    }

    #[test]
    fn invalid_is_never_overwritten() {
        assert_eq!(O::Invalid("first") + O::Valid, O::Invalid("first"));
        assert_eq!(O::Invalid("first") + O::Coerced("v", "e"), O::Invalid("first"));
        assert_eq!(O::Invalid("first") + O::Invalid("second"), O::Invalid("first"));
    }

    #[test]
    fn empty_fold_is_valid() {
        let folded: O = std::iter::empty().sum();
        assert_eq!(folded, O::Valid);
    }

    #[test]
    fn collect_folds_in_order() {
        let folded: O = vec![O::Valid, O::Invalid("one"), O::Invalid("two")]
            .into_iter()
            .collect();
        assert_eq!(folded, O::Invalid("one"));
    }

    #[test]
    fn map_value_touches_only_coerced() {
        assert_eq!(O::Coerced("abc", "e").map_value(str::len), Outcome::Coerced(3, "e"));
        assert_eq!(O::Invalid("e").map_value(str::len), Outcome::Invalid("e"));
        assert_eq!(O::Valid.map_value(str::len), Outcome::<usize, &str>::Valid);
    }

    #[test]
    fn into_result() {
        assert_eq!(O::Valid.into_result(), Ok(None));
        assert_eq!(O::Coerced("v", "e").into_result(), Ok(Some("v")));
        assert_eq!(O::Invalid("e").into_result(), Err("e"));
    }

    #[test]
    fn accessors() {
        let coerced = O::Coerced("v", "e");
        assert!(coerced.is_coerced());
        assert_eq!(coerced.error(), Some(&"e"));
        assert_eq!(coerced.coerced_value(), Some(&"v"));
        assert!(O::Valid.error().is_none());
        assert!(O::Invalid("e").is_invalid());
    }
}
