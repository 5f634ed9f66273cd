//! Text predicates: length, membership, character classes and case.
//!
//! Lengths are measured in Unicode scalar values, not bytes.

/// Length of `value` in chars.
#[inline]
#[must_use]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// `value` is exactly `length` chars long.
#[must_use]
pub fn exact_length(value: &str, length: usize) -> bool {
    char_len(value) == length
}

/// `value` is at least `length` chars long.
#[must_use]
pub fn min_length(value: &str, length: usize) -> bool {
    char_len(value) >= length
}

/// `value` is at most `length` chars long.
#[must_use]
pub fn max_length(value: &str, length: usize) -> bool {
    char_len(value) <= length
}

/// `value` contains `seed`.
#[must_use]
pub fn contains(value: &str, seed: &str) -> bool {
    value.contains(seed)
}

/// `value` equals `expected`.
#[must_use]
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}

/// `value` is one of `candidates`.
#[must_use]
pub fn is_in<S: AsRef<str>>(value: &str, candidates: &[S]) -> bool {
    candidates.iter().any(|c| c.as_ref() == value)
}

/// `value` is the empty string.
#[must_use]
pub fn is_empty(value: &str) -> bool {
    value.is_empty()
}

/// `value` is not the empty string. Whitespace counts as content.
#[must_use]
pub fn required(value: &str) -> bool {
    !value.is_empty()
}

/// Non-empty and ASCII only.
#[must_use]
pub fn is_ascii(value: &str) -> bool {
    !value.is_empty() && value.is_ascii()
}

/// Non-empty and ASCII letters only.
#[must_use]
pub fn is_alpha(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

/// Non-empty and ASCII letters or digits only.
#[must_use]
pub fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Lowercasing `value` leaves it unchanged.
#[must_use]
pub fn is_lowercase(value: &str) -> bool {
    value.to_lowercase() == value
}

/// Uppercasing `value` leaves it unchanged.
#[must_use]
pub fn is_uppercase(value: &str) -> bool {
    value.to_uppercase() == value
}
