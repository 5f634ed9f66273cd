//! Encoded-value predicates: base64, UUID and Mongo object ids.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Standard-alphabet, padded base64. The empty string decodes to nothing
/// and is accepted.
#[must_use]
pub fn is_base64(value: &str) -> bool {
    STANDARD.decode(value).is_ok()
}

/// A hyphenated UUID (`8-4-4-4-12` hex digits, any case).
#[must_use]
pub fn is_uuid(value: &str) -> bool {
    value.len() == 36 && uuid::Uuid::try_parse(value).is_ok()
}

/// 24 hexadecimal digits.
#[must_use]
pub fn is_mongo_id(value: &str) -> bool {
    value.len() == 24 && value.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64() {
        assert!(is_base64("Vml2YW11cyBmZXJtZW50dW0gc2VtcGVyIHBvcnRhLg=="));
        assert!(is_base64("HQIDAQAB"));
        assert!(is_base64(""));
        assert!(!is_base64("12345"));
        assert!(!is_base64("Vml2YW11cyBmZXJtZtesting123"));
    }

    #[test]
    fn uuid_requires_hyphens() {
        assert!(is_uuid("33041937-05b2-464a-98ad-3910cbe0d09e"));
        assert!(!is_uuid("3304193705b2464a98ad3910cbe0d09e"));
        assert!(!is_uuid("123"));
    }

    #[test]
    fn mongo_id() {
        assert!(is_mongo_id("507f1f77bcf86cd799439011"));
        assert!(!is_mongo_id("507f1f77bcf86cd7994390"));
        assert!(!is_mongo_id("507f1f77bcf86cd79943901z"));
    }
}
