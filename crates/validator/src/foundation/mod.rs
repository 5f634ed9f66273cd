//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Outcome**: [`Outcome`] and its left-biased combination operator
//! - **Errors**: [`ValidationError`], one variant per rule
//! - **Input**: [`StringConvertible`], what a validator can look at
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Erasure**: [`BoxValidator`], [`FnValidator`]
//!
//! # Architecture
//!
//! ## 1. Three-valued outcomes
//!
//! A validator does not answer yes or no. It answers `Valid`, `Invalid(e)`,
//! or `Coerced(v, e)`: "accepted, but replaced by `v`, and here is why".
//!
//! ## 2. Absent input is explicit
//!
//! Validators take `Option<&str>`. A missing value is not an empty string,
//! and each rule decides whether absence passes.
//!
//! ## 3. Composition
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let password = combine![required(), min_length(8), max_length(32)];
//! assert!(password.validate(Some("a-valid-password")).is_valid());
//! ```

pub mod boxed;
pub mod error;
pub mod input;
pub mod outcome;
pub mod traits;

pub use boxed::{BoxValidator, FnValidator, from_fn};
pub use error::{FieldTag, ValidationError};
pub use input::StringConvertible;
pub use outcome::{Decision, Outcome};
pub use traits::{Validate, ValidateExt};
