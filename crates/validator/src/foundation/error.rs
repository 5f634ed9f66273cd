//! The closed set of validation failures.
//!
//! One variant per catalogue rule. Every variant carries the optional field
//! tag of the rule that produced it plus the rule's parameters, so the error
//! alone is enough to render a message:
//!
//! ```rust,ignore
//! use verity_validator::foundation::ValidationError;
//!
//! let error = ValidationError::MinLength { tag: Some("password".into()), length: 8 };
//! assert_eq!(error.to_string(), "[password] must be at least 8 characters long");
//! assert_eq!(error.code(), "min_length");
//! ```

use std::fmt;

use serde::Serialize;

use crate::primitives::{FqdnOptions, IsbnVersion, Phone, PostalCode};

/// Free-form label naming the form field an error belongs to.
pub type FieldTag = Option<String>;

/// Renders `[tag] ` or nothing.
struct Prefix<'a>(&'a FieldTag);

impl fmt::Display for Prefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(tag) => write!(f, "[{tag}] "),
            None => Ok(()),
        }
    }
}

fn prefix(tag: &FieldTag) -> Prefix<'_> {
    Prefix(tag)
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Why a validator rejected (or coerced) its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum ValidationError {
    /// No more specific reason is known.
    #[error("{}value is not valid", prefix(.tag))]
    NotSpecified { tag: FieldTag },

    #[error("{}must contain \"{seed}\"", prefix(.tag))]
    Contains { tag: FieldTag, seed: String },

    #[error("{}must equal \"{expected}\"", prefix(.tag))]
    Equals { tag: FieldTag, expected: String },

    /// Like `Equals`, but the expected value is read from a watched source
    /// at validation time.
    #[error("{}must match \"{expected}\"", prefix(.tag))]
    WatchEquals { tag: FieldTag, expected: String },

    #[error("{}must be exactly {length} characters long", prefix(.tag))]
    ExactLength { tag: FieldTag, length: usize },

    #[error("{}must contain only ASCII characters", prefix(.tag))]
    IsAscii { tag: FieldTag },

    #[error("{}must be a date after {date} ({format})", prefix(.tag))]
    IsAfter {
        tag: FieldTag,
        date: String,
        format: String,
    },

    #[error("{}must contain only letters", prefix(.tag))]
    IsAlpha { tag: FieldTag },

    #[error("{}must contain only letters and digits", prefix(.tag))]
    IsAlphanumeric { tag: FieldTag },

    #[error("{}must be base64 encoded", prefix(.tag))]
    IsBase64 { tag: FieldTag },

    #[error("{}must be a date before {date} ({format})", prefix(.tag))]
    IsBefore {
        tag: FieldTag,
        date: String,
        format: String,
    },

    #[error("{}must be a boolean", prefix(.tag))]
    IsBool { tag: FieldTag },

    #[error("{}must be a credit card number", prefix(.tag))]
    IsCreditCard { tag: FieldTag },

    #[error("{}must be a date in the format {format}", prefix(.tag))]
    IsDate { tag: FieldTag, format: String },

    #[error("{}must be an email address", prefix(.tag))]
    IsEmail { tag: FieldTag },

    #[error("{}must be empty", prefix(.tag))]
    IsEmpty { tag: FieldTag },

    #[error("{}must be a fully qualified domain name", prefix(.tag))]
    IsFqdn { tag: FieldTag, options: FqdnOptions },

    #[error("{}must be false", prefix(.tag))]
    IsFalse { tag: FieldTag },

    #[error("{}must be a floating point number", prefix(.tag))]
    IsFloat { tag: FieldTag },

    #[error("{}must be a hexadecimal number", prefix(.tag))]
    IsHexadecimal { tag: FieldTag },

    #[error("{}must be a hex color", prefix(.tag))]
    IsHexColor { tag: FieldTag },

    #[error("{}must be an IP address", prefix(.tag))]
    IsIp { tag: FieldTag },

    #[error("{}must be an IPv4 address", prefix(.tag))]
    IsIpv4 { tag: FieldTag },

    #[error("{}must be an IPv6 address", prefix(.tag))]
    IsIpv6 { tag: FieldTag },

    #[error("{}must be an ISBN-{version}", prefix(.tag))]
    IsIsbn { tag: FieldTag, version: IsbnVersion },

    #[error("{}must be one of: {}", prefix(.tag), .values.join(", "))]
    IsIn { tag: FieldTag, values: Vec<String> },

    #[error("{}must be an integer", prefix(.tag))]
    IsInt { tag: FieldTag },

    #[error("{}must be lowercase", prefix(.tag))]
    IsLowercase { tag: FieldTag },

    #[error("{}must be a MongoDB object id", prefix(.tag))]
    IsMongoId { tag: FieldTag },

    #[error("{}must be absent", prefix(.tag))]
    IsNil { tag: FieldTag },

    #[error("{}must contain only digits", prefix(.tag))]
    IsNumeric { tag: FieldTag },

    #[error("{}must be a {locale} phone number", prefix(.tag))]
    IsPhone { tag: FieldTag, locale: Phone },

    #[error("{}must be a {country} postal code", prefix(.tag))]
    IsPostalCode { tag: FieldTag, country: PostalCode },

    #[error("{}must be true", prefix(.tag))]
    IsTrue { tag: FieldTag },

    #[error("{}must be a UUID", prefix(.tag))]
    IsUuid { tag: FieldTag },

    #[error("{}must be uppercase", prefix(.tag))]
    IsUppercase { tag: FieldTag },

    #[error("{}must be at most {length} characters long", prefix(.tag))]
    MaxLength { tag: FieldTag, length: usize },

    #[error("{}must be at least {length} characters long", prefix(.tag))]
    MinLength { tag: FieldTag, length: usize },

    #[error("{}must match /{pattern}/", prefix(.tag))]
    Regex { tag: FieldTag, pattern: String },

    #[error("{}is required", prefix(.tag))]
    Required { tag: FieldTag },
}

impl ValidationError {
    /// Stable snake_case identifier of the rule, e.g. `"min_length"`.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotSpecified { .. } => "not_specified",
            Self::Contains { .. } => "contains",
            Self::Equals { .. } => "equals",
            Self::WatchEquals { .. } => "watch_equals",
            Self::ExactLength { .. } => "exact_length",
            Self::IsAscii { .. } => "is_ascii",
            Self::IsAfter { .. } => "is_after",
            Self::IsAlpha { .. } => "is_alpha",
            Self::IsAlphanumeric { .. } => "is_alphanumeric",
            Self::IsBase64 { .. } => "is_base64",
            Self::IsBefore { .. } => "is_before",
            Self::IsBool { .. } => "is_bool",
            Self::IsCreditCard { .. } => "is_credit_card",
            Self::IsDate { .. } => "is_date",
            Self::IsEmail { .. } => "is_email",
            Self::IsEmpty { .. } => "is_empty",
            Self::IsFqdn { .. } => "is_fqdn",
            Self::IsFalse { .. } => "is_false",
            Self::IsFloat { .. } => "is_float",
            Self::IsHexadecimal { .. } => "is_hexadecimal",
            Self::IsHexColor { .. } => "is_hex_color",
            Self::IsIp { .. } => "is_ip",
            Self::IsIpv4 { .. } => "is_ipv4",
            Self::IsIpv6 { .. } => "is_ipv6",
            Self::IsIsbn { .. } => "is_isbn",
            Self::IsIn { .. } => "is_in",
            Self::IsInt { .. } => "is_int",
            Self::IsLowercase { .. } => "is_lowercase",
            Self::IsMongoId { .. } => "is_mongo_id",
            Self::IsNil { .. } => "is_nil",
            Self::IsNumeric { .. } => "is_numeric",
            Self::IsPhone { .. } => "is_phone",
            Self::IsPostalCode { .. } => "is_postal_code",
            Self::IsTrue { .. } => "is_true",
            Self::IsUuid { .. } => "is_uuid",
            Self::IsUppercase { .. } => "is_uppercase",
            Self::MaxLength { .. } => "max_length",
            Self::MinLength { .. } => "min_length",
            Self::Regex { .. } => "regex",
            Self::Required { .. } => "required",
        }
    }

    /// The field tag, if one was attached.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag_ref().as_deref()
    }

    /// Replaces the field tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        *self.tag_mut() = Some(tag.into());
        self
    }

    /// Replaces or clears the field tag.
    #[must_use]
    pub fn with_field_tag(mut self, tag: FieldTag) -> Self {
        *self.tag_mut() = tag;
        self
    }

    fn tag_ref(&self) -> &FieldTag {
        match self {
            Self::NotSpecified { tag }
            | Self::Contains { tag, .. }
            | Self::Equals { tag, .. }
            | Self::WatchEquals { tag, .. }
            | Self::ExactLength { tag, .. }
            | Self::IsAscii { tag }
            | Self::IsAfter { tag, .. }
            | Self::IsAlpha { tag }
            | Self::IsAlphanumeric { tag }
            | Self::IsBase64 { tag }
            | Self::IsBefore { tag, .. }
            | Self::IsBool { tag }
            | Self::IsCreditCard { tag }
            | Self::IsDate { tag, .. }
            | Self::IsEmail { tag }
            | Self::IsEmpty { tag }
            | Self::IsFqdn { tag, .. }
            | Self::IsFalse { tag }
            | Self::IsFloat { tag }
            | Self::IsHexadecimal { tag }
            | Self::IsHexColor { tag }
            | Self::IsIp { tag }
            | Self::IsIpv4 { tag }
            | Self::IsIpv6 { tag }
            | Self::IsIsbn { tag, .. }
            | Self::IsIn { tag, .. }
            | Self::IsInt { tag }
            | Self::IsLowercase { tag }
            | Self::IsMongoId { tag }
            | Self::IsNil { tag }
            | Self::IsNumeric { tag }
            | Self::IsPhone { tag, .. }
            | Self::IsPostalCode { tag, .. }
            | Self::IsTrue { tag }
            | Self::IsUuid { tag }
            | Self::IsUppercase { tag }
            | Self::MaxLength { tag, .. }
            | Self::MinLength { tag, .. }
            | Self::Regex { tag, .. }
            | Self::Required { tag } => tag,
        }
    }

    fn tag_mut(&mut self) -> &mut FieldTag {
        match self {
            Self::NotSpecified { tag }
            | Self::Contains { tag, .. }
            | Self::Equals { tag, .. }
            | Self::WatchEquals { tag, .. }
            | Self::ExactLength { tag, .. }
            | Self::IsAscii { tag }
            | Self::IsAfter { tag, .. }
            | Self::IsAlpha { tag }
            | Self::IsAlphanumeric { tag }
            | Self::IsBase64 { tag }
            | Self::IsBefore { tag, .. }
            | Self::IsBool { tag }
            | Self::IsCreditCard { tag }
            | Self::IsDate { tag, .. }
            | Self::IsEmail { tag }
            | Self::IsEmpty { tag }
            | Self::IsFqdn { tag, .. }
            | Self::IsFalse { tag }
            | Self::IsFloat { tag }
            | Self::IsHexadecimal { tag }
            | Self::IsHexColor { tag }
            | Self::IsIp { tag }
            | Self::IsIpv4 { tag }
            | Self::IsIpv6 { tag }
            | Self::IsIsbn { tag, .. }
            | Self::IsIn { tag, .. }
            | Self::IsInt { tag }
            | Self::IsLowercase { tag }
            | Self::IsMongoId { tag }
            | Self::IsNil { tag }
            | Self::IsNumeric { tag }
            | Self::IsPhone { tag, .. }
            | Self::IsPostalCode { tag, .. }
            | Self::IsTrue { tag }
            | Self::IsUuid { tag }
            | Self::IsUppercase { tag }
            | Self::MaxLength { tag, .. }
            | Self::MinLength { tag, .. }
            | Self::Regex { tag, .. }
            | Self::Required { tag } => tag,
        }
    }
}

impl Default for ValidationError {
    fn default() -> Self {
        Self::NotSpecified { tag: None }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_without_tag() {
        let error = ValidationError::MinLength {
            tag: None,
            length: 8,
        };
        assert_eq!(error.to_string(), "must be at least 8 characters long");
    }

    #[test]
    fn display_with_tag() {
        let error = ValidationError::Required { tag: None }.with_tag("email");
        assert_eq!(error.tag(), Some("email"));
        assert_eq!(error.to_string(), "[email] is required");
    }

    #[test]
    fn display_lists_membership_values() {
        let error = ValidationError::IsIn {
            tag: None,
            values: vec!["a".into(), "b".into()],
        };
        assert_eq!(error.to_string(), "must be one of: a, b");
    }

    #[test]
    fn display_uses_locale_codes() {
        let error = ValidationError::IsPhone {
            tag: None,
            locale: Phone::el_GR,
        };
        assert_eq!(error.to_string(), "must be a el-GR phone number");
    }

    #[test]
    fn retag_and_clear() {
        let error = ValidationError::IsEmail {
            tag: Some("a".into()),
        };
        let error = error.with_tag("b");
        assert_eq!(error.tag(), Some("b"));
        assert_eq!(error.with_field_tag(None).tag(), None);
    }

    #[test]
    fn codes_are_snake_case() {
        assert_eq!(ValidationError::default().code(), "not_specified");
        assert_eq!(
            ValidationError::IsHexColor { tag: None }.code(),
            "is_hex_color"
        );
    }

    #[test]
    fn serializes_with_code() {
        let error = ValidationError::ExactLength {
            tag: Some("pin".into()),
            length: 4,
        };
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "exact_length", "tag": "pin", "length": 4 })
        );
    }
}
