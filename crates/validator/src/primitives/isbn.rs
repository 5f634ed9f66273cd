//! ISBN-10 and ISBN-13 checksums.
//!
//! Spaces and hyphens are ignored before the checksum is computed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Which ISBN standard to check against.
///
/// Deserializes from `10`, `"10"` or `"v10"` (and likewise for 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IsbnVersion {
    /// Ten characters, the last one may be `X`.
    #[serde(rename = "10")]
    V10,
    /// Thirteen digits.
    #[serde(rename = "13")]
    V13,
}

/// An ISBN version other than 10 or 13.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported ISBN version `{0}`, expected 10 or 13")]
pub struct UnknownIsbnVersion(pub String);

impl FromStr for IsbnVersion {
    type Err = UnknownIsbnVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix(['v', 'V'])
            .unwrap_or(trimmed);
        match digits {
            "10" => Ok(Self::V10),
            "13" => Ok(Self::V13),
            _ => Err(UnknownIsbnVersion(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for IsbnVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Text(String),
        }

        let text = match Repr::deserialize(deserializer)? {
            Repr::Number(n) => n.to_string(),
            Repr::Text(s) => s,
        };
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for IsbnVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V10 => f.write_str("10"),
            Self::V13 => f.write_str("13"),
        }
    }
}

/// `value` is a valid ISBN of the given `version`.
#[must_use]
pub fn is_isbn(value: &str, version: IsbnVersion) -> bool {
    let sanitized: Vec<char> = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    match version {
        IsbnVersion::V10 => isbn10(&sanitized),
        IsbnVersion::V13 => isbn13(&sanitized),
    }
}

fn isbn10(chars: &[char]) -> bool {
    if chars.len() != 10 {
        return false;
    }

    let mut sum = 0;
    for (i, c) in chars.iter().enumerate() {
        let digit = match (i, c) {
            (9, 'X') => 10,
            (_, c) => match c.to_digit(10) {
                Some(d) => d,
                None => return false,
            },
        };
        sum += (i as u32 + 1) * digit;
    }
    sum % 11 == 0
}

fn isbn13(chars: &[char]) -> bool {
    if chars.len() != 13 {
        return false;
    }

    let Some(digits) = chars
        .iter()
        .map(|c| c.to_digit(10))
        .collect::<Option<Vec<u32>>>()
    else {
        return false;
    };

    let sum: u32 = digits[..12]
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10 == digits[12]
}
