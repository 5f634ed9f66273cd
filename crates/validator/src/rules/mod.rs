//! The rule catalogue
//!
//! Every rule pairs one primitive predicate from [`crate::primitives`] with
//! the [`ValidationError`] variant it reports, an optional field tag, and a
//! `nil_response` flag deciding what happens to absent input.
//!
//! # Semantics
//!
//! - Present input is `Valid` when the predicate holds, otherwise
//!   `Invalid(error)`.
//! - Absent input is `Valid` exactly when `nil_response` is `true`, except
//!   for [`is_nil`], which accepts only absent input.
//! - Rules never coerce.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let email = is_email().tag("email");
//! assert!(email.validate(Some("a@b.com")).is_valid());
//! assert_eq!(
//!     email.validate(Some("nope")).error().map(ToString::to_string),
//!     Some("[email] must be an email address".to_string()),
//! );
//!
//! let optional_email = is_email().nil_response(true);
//! assert!(optional_email.validate(None).is_valid());
//! ```

mod date;
mod dynamic;
mod format;
mod number;
mod text;

pub use date::{
    IsAfter, IsBefore, IsDate, is_after, is_after_in, is_before, is_before_in, is_date, is_date_in,
};
pub use dynamic::{EqualsWith, equals_with, watch_equals_with};
pub use format::{
    IsBase64, IsCreditCard, IsEmail, IsFqdn, IsIp, IsIpv4, IsIpv6, IsIsbn, IsMongoId, IsPhone,
    IsPostalCode, IsUuid, is_base64, is_credit_card, is_email, is_fqdn, is_fqdn_with, is_ip,
    is_ipv4, is_ipv6, is_isbn, is_mongo_id, is_phone, is_postal_code, is_uuid,
};
pub use number::{
    IsBool, IsFalse, IsFloat, IsHexColor, IsHexadecimal, IsInt, IsNumeric, IsTrue, is_bool,
    is_false, is_float, is_hex_color, is_hexadecimal, is_int, is_numeric, is_true,
};
pub use text::{
    Contains, Equals, ExactLength, IsAlpha, IsAlphanumeric, IsAscii, IsEmpty, IsIn, IsLowercase,
    IsNil, IsUppercase, MaxLength, MinLength, Pattern, Required, contains, equals, exact_length,
    is_alpha, is_alphanumeric, is_ascii, is_empty, is_in, is_lowercase, is_nil, is_uppercase,
    max_length, min_length, regex, required,
};

use crate::foundation::{Decision, FieldTag, Outcome, Validate, ValidationError};

/// Date format used by the date rules unless another is given.
pub const DEFAULT_DATE_FORMAT: &str = "dd/MM/yyyy";

// ============================================================================
// CHECK
// ============================================================================

/// One primitive predicate plus the error it maps to.
pub trait Check: Send + Sync {
    /// Whether a present `value` passes.
    fn check(&self, value: &str) -> bool;

    /// Whether an absent value passes. Defaults to `nil_response`.
    fn check_absent(&self, nil_response: bool) -> bool {
        nil_response
    }

    /// The error reported on failure, carrying `tag`.
    fn error(&self, tag: FieldTag) -> ValidationError;
}

// ============================================================================
// RULE
// ============================================================================

/// A [`Check`] configured with a field tag and a `nil_response` flag.
///
/// Built by the catalogue functions (`min_length(8)`, `is_email()`, ...)
/// and refined with the builder methods.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a rule does nothing until it validates something"]
pub struct Rule<C> {
    check: C,
    tag: FieldTag,
    nil_response: bool,
}

impl<C: Check> Rule<C> {
    /// A rule with no tag that rejects absent input.
    pub fn new(check: C) -> Self {
        Self {
            check,
            tag: None,
            nil_response: false,
        }
    }

    /// Tags every error this rule reports.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets the tag, or clears it with `None`.
    pub fn field_tag(mut self, tag: FieldTag) -> Self {
        self.tag = tag;
        self
    }

    /// Whether absent input passes.
    pub fn nil_response(mut self, nil_response: bool) -> Self {
        self.nil_response = nil_response;
        self
    }

    /// The configured tag.
    #[must_use]
    pub fn tag_ref(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The configured `nil_response`.
    #[must_use]
    pub const fn accepts_nil(&self) -> bool {
        self.nil_response
    }

    /// The underlying check.
    pub fn check(&self) -> &C {
        &self.check
    }
}

impl<C: Check> Validate for Rule<C> {
    fn validate(&self, input: Option<&str>) -> Decision {
        let passed = match input {
            Some(value) => self.check.check(value),
            None => self.check.check_absent(self.nil_response),
        };

        if passed {
            Outcome::Valid
        } else {
            Outcome::Invalid(self.check.error(self.tag.clone()))
        }
    }
}
