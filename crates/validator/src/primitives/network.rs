//! Network predicates: email addresses, domain names and IP addresses.
//!
//! Domain rules:
//! - Labels are split on `.`, each 1..=63 chars
//! - Label chars: ASCII letters, digits, `-` and non-ASCII letters
//!   (full-width forms excluded); underscores only when allowed
//! - Labels must not start or end with a hyphen
//! - The TLD must be alphabetic (2+ chars) or a punycode `xn--` label

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z\x{00a1}-\x{ffff}0-9-]+$").expect("label regex compiles")
});

static LABEL_UNDERSCORE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z\x{00a1}-\x{ffff}0-9_-]+$").expect("label regex compiles")
});

static FULL_WIDTH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{ff01}-\x{ff5e}]").expect("full width regex compiles"));

static TLD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:[a-z\x{00a1}-\x{ffff}]{2,}|xn[a-z0-9-]{2,})$").expect("tld regex compiles")
});

const LOCAL_PART_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";
const MAX_LOCAL_PART: usize = 64;
const MAX_DOMAIN: usize = 254;
const MAX_LABEL: usize = 63;

// ============================================================================
// FQDN
// ============================================================================

/// Knobs for [`is_fqdn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FqdnOptions {
    /// The last label must look like a top-level domain.
    pub require_tld: bool,
    /// Labels may contain `_`.
    pub allow_underscores: bool,
    /// A single trailing `.` is ignored.
    pub allow_trailing_dot: bool,
}

impl Default for FqdnOptions {
    fn default() -> Self {
        Self {
            require_tld: true,
            allow_underscores: false,
            allow_trailing_dot: false,
        }
    }
}

/// A fully qualified domain name under `options`.
#[must_use]
pub fn is_fqdn(value: &str, options: &FqdnOptions) -> bool {
    let host = if options.allow_trailing_dot {
        value.strip_suffix('.').unwrap_or(value)
    } else {
        value
    };

    let labels: Vec<&str> = host.split('.').collect();

    if options.require_tld {
        let Some(tld) = labels.last() else {
            return false;
        };
        if labels.len() < 2 || !TLD_REGEX.is_match(tld) || tld.chars().any(char::is_whitespace) {
            return false;
        }
    }

    let label_regex = if options.allow_underscores {
        &*LABEL_UNDERSCORE_REGEX
    } else {
        &*LABEL_REGEX
    };

    labels.iter().all(|label| {
        label.chars().count() <= MAX_LABEL
            && label_regex.is_match(label)
            && !FULL_WIDTH_REGEX.is_match(label)
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

// ============================================================================
// EMAIL
// ============================================================================

/// An email address: `local@domain` with a fully qualified domain.
///
/// Gmail ignores dots in the local part, so they are dropped before the
/// local part is checked for `gmail.com` and `googlemail.com` addresses.
#[must_use]
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };

    if local.is_empty() || local.chars().count() > MAX_LOCAL_PART || domain.len() > MAX_DOMAIN {
        return false;
    }

    if !is_fqdn(domain, &FqdnOptions::default()) {
        return false;
    }

    let domain = domain.to_lowercase();
    if domain == "gmail.com" || domain == "googlemail.com" {
        let stripped: String = local.chars().filter(|c| *c != '.').collect();
        return !stripped.is_empty() && stripped.chars().all(is_local_char);
    }

    local
        .split('.')
        .all(|atom| !atom.is_empty() && atom.chars().all(is_local_char))
}

fn is_local_char(c: char) -> bool {
    c.is_alphanumeric() || LOCAL_PART_SPECIALS.contains(c)
}

// ============================================================================
// IP ADDRESSES
// ============================================================================

/// A dotted-quad IPv4 address.
#[must_use]
pub fn is_ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

/// An IPv6 address, including `::` compression and embedded IPv4 tails.
#[must_use]
pub fn is_ipv6(value: &str) -> bool {
    value.parse::<Ipv6Addr>().is_ok()
}

/// Either an IPv4 or an IPv6 address.
#[must_use]
pub fn is_ip(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}
