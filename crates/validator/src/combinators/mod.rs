//! Validator combinators
//!
//! - [`And`]: two validators, outcomes merged
//! - [`Combined`] / [`combine`]: an ordered list folded into one outcome
//! - [`Tagged`]: re-tags the errors of another validator
//!
//! All merging goes through [`Outcome::combine`](crate::foundation::Outcome::combine),
//! so every combinator shares its left bias and associativity.

pub mod and;
pub mod combine;
pub mod tagged;

pub use and::{And, and};
pub use combine::{Combined, combine, fold};
pub use tagged::Tagged;
