//! Boolean and numeric string predicates.

use std::sync::LazyLock;

use regex::Regex;

static INT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?(?:0|[1-9][0-9]*)$").expect("int regex compiles"));

// Matches the empty string on purpose. A sign needs digits after it.
static FLOAT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[-+]?[0-9]+)?(?:\.[0-9]*)?(?:[eE][-+]?[0-9]+)?$")
        .expect("float regex compiles")
});

static NUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?[0-9]+$").expect("numeric regex compiles"));

static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color regex compiles")
});

/// `"true"` or `"false"`, ASCII case-insensitive.
#[must_use]
pub fn is_bool(value: &str) -> bool {
    is_true(value) || is_false(value)
}

/// `"true"`, ASCII case-insensitive.
#[must_use]
pub fn is_true(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// `"false"`, ASCII case-insensitive.
#[must_use]
pub fn is_false(value: &str) -> bool {
    value.eq_ignore_ascii_case("false")
}

/// A signed integer without leading zeros.
#[must_use]
pub fn is_int(value: &str) -> bool {
    INT_REGEX.is_match(value)
}

/// A decimal number with optional sign, fraction and exponent.
#[must_use]
pub fn is_float(value: &str) -> bool {
    FLOAT_REGEX.is_match(value)
}

/// Digits with an optional leading sign.
#[must_use]
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value)
}

/// One or more hexadecimal digits.
#[must_use]
pub fn is_hexadecimal(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// Three or six hex digits, optionally prefixed with `#`.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_REGEX.is_match(value)
}
