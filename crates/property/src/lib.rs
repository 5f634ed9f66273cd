//! # verity-property
//!
//! Observable properties and the glue that binds validators to them.
//!
//! - [`MutableProperty`] / [`Property`]: writable and read-only observable
//!   values with synchronous propagation and `tokio::sync::watch`
//!   subscriptions.
//! - [`ValidatingProperty`]: a string property that runs a validator on
//!   every write and exposes `has_errors` and `error_message`.
//! - [`Field`]: a form input view model.
//! - [`Action`]: async work enabled by observable state.
//! - [`rules`]: validators that compare against another property.
//!
//! ```rust,ignore
//! use verity_property::prelude::*;
//! use verity_validator::prelude::{combine, max_length, min_length, required};
//!
//! let password = ValidatingProperty::new(
//!     None,
//!     combine![required(), min_length(8), max_length(32)],
//! );
//! let field = Field::new(1, Some("password"), password);
//! assert!(!field.has_errors().value());
//!
//! field.edit(Some("short".into()));
//! assert!(field.has_errors().value());
//! ```

pub mod action;
pub mod field;
pub mod property;
pub mod rules;
pub mod validating;

pub use action::{Action, ActionError};
pub use field::Field;
pub use property::{MutableProperty, Observable, ObserverId, Property};
pub use validating::{ValidatingProperty, ValidationResult};

pub mod prelude {
    //! `use verity_property::prelude::*;` for the common types and the
    //! [`Observable`] trait.

    pub use crate::action::{Action, ActionError};
    pub use crate::field::Field;
    pub use crate::property::{MutableProperty, Observable, ObserverId, Property};
    pub use crate::validating::{ValidatingProperty, ValidationResult};
}
