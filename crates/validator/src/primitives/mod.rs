//! Primitive string predicates
//!
//! Plain `fn(&str) -> bool` checks with no knowledge of tags, outcomes or
//! absent input. The rule catalogue in [`crate::rules`] wraps each of them
//! into a validator.
//!
//! # Categories
//!
//! - **Text**: length, membership, character classes, case
//! - **Number**: booleans, integers, floats, hexadecimal
//! - **Encoding**: base64, UUID, Mongo object id
//! - **Network**: email, FQDN, IP addresses
//! - **Identifiers**: ISBN, credit card numbers
//! - **Date**: parsing with a format string, before/after comparison
//! - **Locale**: phone numbers and postal codes

pub mod credit_card;
pub mod date;
pub mod encoding;
pub mod isbn;
pub mod locale;
pub mod network;
pub mod number;
pub mod pattern;
pub mod text;

pub use credit_card::is_credit_card;
pub use date::{DateFormat, is_after, is_before, is_date, parse_date};
pub use encoding::{is_base64, is_mongo_id, is_uuid};
pub use isbn::{IsbnVersion, UnknownIsbnVersion, is_isbn};
pub use locale::{Phone, PostalCode, UnknownLocale, is_phone, is_postal_code};
pub use network::{FqdnOptions, is_email, is_fqdn, is_ip, is_ipv4, is_ipv6};
pub use number::{
    is_bool, is_false, is_float, is_hex_color, is_hexadecimal, is_int, is_numeric, is_true,
};
pub use pattern::FullMatch;
pub use text::{
    char_len, contains, equals, exact_length, is_alpha, is_alphanumeric, is_ascii, is_empty,
    is_in, is_lowercase, is_uppercase, max_length, min_length, required,
};
