//! Credit card numbers: issuer shape plus Luhn checksum.
//!
//! Spaces and hyphens between digit groups are ignored. Recognised shapes
//! cover Visa, Mastercard (51-55 and 2221-2720), American Express, Diners
//! Club, Discover, JCB and UnionPay.

use std::sync::LazyLock;

use regex::Regex;

static CARD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"4[0-9]{12}(?:[0-9]{3})?",
        r"|5[1-5][0-9]{14}",
        r"|(?:222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}",
        r"|6(?:011|5[0-9][0-9])[0-9]{12}",
        r"|3[47][0-9]{13}",
        r"|3(?:0[0-5]|[68][0-9])[0-9]{11}",
        r"|(?:2131|1800|35[0-9]{3})[0-9]{11}",
        r"|6[27][0-9]{14}",
        r")$"
    ))
    .expect("card regex compiles")
});

/// `value` looks like a card number from a known issuer and passes Luhn.
#[must_use]
pub fn is_credit_card(value: &str) -> bool {
    let sanitized: String = value.chars().filter(|c| *c != ' ' && *c != '-').collect();
    CARD_REGEX.is_match(&sanitized) && luhn(&sanitized)
}

/// Luhn mod-10 checksum over an all-digit string.
fn luhn(digits: &str) -> bool {
    let mut sum = 0;
    for (i, c) in digits.chars().rev().enumerate() {
        let Some(mut digit) = c.to_digit(10) else {
            return false;
        };
        if i % 2 == 1 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }
    sum % 10 == 0
}
