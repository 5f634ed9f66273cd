//! # verity-validator
//!
//! String validation built from small rules and one associative fold.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let password = combine![required(), min_length(8), max_length(32)];
//! assert!(password.validate(Some("correct horse")).is_valid());
//! assert_eq!(
//!     password.validate(Some("short")).error().map(ToString::to_string),
//!     Some("must be at least 8 characters long".to_string()),
//! );
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: [`Outcome`](foundation::Outcome), the
//!   [`Validate`](foundation::Validate) trait and
//!   [`ValidationError`](foundation::ValidationError)
//! - [`combinators`]: [`And`](combinators::And),
//!   [`Combined`](combinators::Combined), [`Tagged`](combinators::Tagged)
//! - [`primitives`]: plain `&str -> bool` predicates
//! - [`rules`]: the catalogue, one [`Rule`](rules::Rule) per predicate
//! - [`config`]: serde definitions for rules and forms

// ValidationError is returned by value from every rule; boxing it would
// put an allocation on every failed check.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod primitives;
pub mod rules;
