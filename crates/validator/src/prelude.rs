//! Prelude module for convenient imports.
//!
//! `use verity_validator::prelude::*;` brings in the traits, the error and
//! outcome types, every catalogue rule and the combinators.

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    BoxValidator, Decision, FieldTag, Outcome, StringConvertible, Validate, ValidateExt,
    ValidationError, from_fn,
};

// ============================================================================
// RULES
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;

pub use crate::primitives::{DateFormat, FqdnOptions, IsbnVersion, Phone, PostalCode};

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, Combined, Tagged, and, combine, fold};

pub use crate::combine;
