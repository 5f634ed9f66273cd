//! Subcommand implementations.
//!
//! Each returns `Ok(true)` when everything it checked is acceptable.

pub mod check;
pub mod demo;
pub mod form;
