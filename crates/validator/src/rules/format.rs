//! Format rules: encodings, network addresses, identifiers and locale formats.

use crate::foundation::ValidationError;
use crate::primitives::{self, FqdnOptions, IsbnVersion, Phone, PostalCode};

// ============================================================================
// ENCODINGS
// ============================================================================

crate::rule! {
    /// Padded, standard-alphabet base64. The empty string passes.
    pub IsBase64;
    check(value) { primitives::is_base64(value) }
    error(tag) { ValidationError::IsBase64 { tag } }
    fn is_base64();
}

crate::rule! {
    /// Hyphenated UUID in either case.
    pub IsUuid;
    check(value) { primitives::is_uuid(value) }
    error(tag) { ValidationError::IsUuid { tag } }
    fn is_uuid();
}

crate::rule! {
    pub IsMongoId;
    check(value) { primitives::is_mongo_id(value) }
    error(tag) { ValidationError::IsMongoId { tag } }
    fn is_mongo_id();
}

// ============================================================================
// NETWORK
// ============================================================================

crate::rule! {
    pub IsEmail;
    check(value) { primitives::is_email(value) }
    error(tag) { ValidationError::IsEmail { tag } }
    fn is_email();
}

crate::rule! {
    /// A fully qualified domain name.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub IsFqdn { options: FqdnOptions };
    check(self, value) { primitives::is_fqdn(value, &self.options) }
    error(self, tag) { ValidationError::IsFqdn { tag, options: self.options } }
    fn is_fqdn_with(options: FqdnOptions) { IsFqdn { options } }
}

/// A fully qualified domain name under the default [`FqdnOptions`].
#[must_use]
pub fn is_fqdn() -> crate::rules::Rule<IsFqdn> {
    is_fqdn_with(FqdnOptions::default())
}

crate::rule! {
    pub IsIp;
    check(value) { primitives::is_ip(value) }
    error(tag) { ValidationError::IsIp { tag } }
    fn is_ip();
}

crate::rule! {
    pub IsIpv4;
    check(value) { primitives::is_ipv4(value) }
    error(tag) { ValidationError::IsIpv4 { tag } }
    fn is_ipv4();
}

crate::rule! {
    pub IsIpv6;
    check(value) { primitives::is_ipv6(value) }
    error(tag) { ValidationError::IsIpv6 { tag } }
    fn is_ipv6();
}

// ============================================================================
// IDENTIFIERS
// ============================================================================

crate::rule! {
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub IsIsbn { version: IsbnVersion };
    check(self, value) { primitives::is_isbn(value, self.version) }
    error(self, tag) { ValidationError::IsIsbn { tag, version: self.version } }
    fn is_isbn(version: IsbnVersion) { IsIsbn { version } }
}

crate::rule! {
    /// Known issuer prefix and a valid Luhn checksum.
    pub IsCreditCard;
    check(value) { primitives::is_credit_card(value) }
    error(tag) { ValidationError::IsCreditCard { tag } }
    fn is_credit_card();
}

// ============================================================================
// LOCALE
// ============================================================================

crate::rule! {
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub IsPhone { locale: Phone };
    check(self, value) { primitives::is_phone(value, self.locale) }
    error(self, tag) { ValidationError::IsPhone { tag, locale: self.locale } }
    fn is_phone(locale: Phone) { IsPhone { locale } }
}

crate::rule! {
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub IsPostalCode { country: PostalCode };
    check(self, value) { primitives::is_postal_code(value, self.country) }
    error(self, tag) { ValidationError::IsPostalCode { tag, country: self.country } }
    fn is_postal_code(country: PostalCode) { IsPostalCode { country } }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Outcome, Validate};

    #[test]
    fn fqdn_error_carries_options() {
        let options = FqdnOptions {
            require_tld: false,
            ..FqdnOptions::default()
        };
        assert!(is_fqdn_with(options).validate(Some("localhost")).is_valid());
        assert_eq!(
            is_fqdn().validate(Some("localhost")),
            Outcome::Invalid(ValidationError::IsFqdn {
                tag: None,
                options: FqdnOptions::default()
            })
        );
    }

    #[test]
    fn credit_card_rejects_bool() {
        assert!(is_credit_card().apply(Some(&false)).is_invalid());
    }

    #[test]
    fn phone_error_names_locale() {
        let decision = is_phone(Phone::nl_NL).tag("phone").validate(Some("12"));
        assert_eq!(
            decision.error().map(ToString::to_string),
            Some("[phone] must be a nl-NL phone number".to_string())
        );
    }
}
