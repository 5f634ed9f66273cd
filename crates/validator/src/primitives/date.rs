//! Date parsing and comparison with Unicode (LDML) format patterns.
//!
//! Formats are written the way form designers usually write them
//! (`dd/MM/yyyy`, `yyyy-MM-dd HH:mm`) and translated once into `chrono`
//! strftime items. Supported fields:
//!
//! | Pattern        | Meaning               | chrono |
//! |----------------|-----------------------|--------|
//! | `yyyy`, `y`    | year                  | `%Y`   |
//! | `yy`           | two-digit year        | `%y`   |
//! | `M`, `MM`      | month number          | `%m`   |
//! | `MMM`          | abbreviated month     | `%b`   |
//! | `MMMM`         | full month name       | `%B`   |
//! | `d`, `dd`      | day of month          | `%d`   |
//! | `EEE`, `EEEE`  | weekday name          | `%a`/`%A` |
//! | `H`, `HH`      | hour (0-23)           | `%H`   |
//! | `h`, `hh`      | hour (1-12)           | `%I`   |
//! | `m`, `mm`      | minute                | `%M`   |
//! | `s`, `ss`      | second                | `%S`   |
//! | `SSS`          | milliseconds          | `%3f`  |
//! | `a`            | AM/PM                 | `%p`   |
//! | `Z`, `X`, `x`  | UTC offset            | `%z`   |
//!
//! Text between single quotes is literal; `''` is a literal quote.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A parsed date format pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateFormat {
    pattern: String,
    strftime: String,
    has_date: bool,
    has_time: bool,
}

impl DateFormat {
    /// Translates an LDML `pattern` into `chrono` items.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let mut strftime = String::with_capacity(pattern.len() * 2);
        let mut has_date = false;
        let mut has_time = false;

        let chars: Vec<char> = pattern.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];

            if c == '\'' {
                i += 1;
                if chars.get(i) == Some(&'\'') {
                    strftime.push('\'');
                    i += 1;
                    continue;
                }
                while i < chars.len() {
                    if chars[i] == '\'' {
                        if chars.get(i + 1) == Some(&'\'') {
                            strftime.push('\'');
                            i += 2;
                            continue;
                        }
                        break;
                    }
                    push_literal(&mut strftime, chars[i]);
                    i += 1;
                }
                i += 1;
                continue;
            }

            let run = chars[i..].iter().take_while(|&&n| n == c).count();
            i += run;

            let item = match (c, run) {
                ('y', 2) => Some("%y"),
                ('y', _) => Some("%Y"),
                ('M', 1 | 2) => Some("%m"),
                ('M', 3) => Some("%b"),
                ('M', _) => Some("%B"),
                ('d', _) => Some("%d"),
                ('E', 4..) => Some("%A"),
                ('E', _) => Some("%a"),
                ('H', _) => Some("%H"),
                ('h', _) => Some("%I"),
                ('m', _) => Some("%M"),
                ('s', _) => Some("%S"),
                ('S', _) => Some("%3f"),
                ('a', _) => Some("%p"),
                ('Z' | 'X' | 'x', _) => Some("%z"),
                _ => None,
            };

            match item {
                Some(item) => {
                    if matches!(c, 'y' | 'M' | 'd' | 'E') {
                        has_date = true;
                    } else {
                        has_time = true;
                    }
                    strftime.push_str(item);
                }
                None => {
                    for _ in 0..run {
                        push_literal(&mut strftime, c);
                    }
                }
            }
        }

        Self {
            pattern: pattern.to_string(),
            strftime,
            has_date,
            has_time,
        }
    }

    /// The LDML pattern as written.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The translated `chrono` format string.
    #[must_use]
    pub fn strftime(&self) -> &str {
        &self.strftime
    }

    /// Parses `value`, filling missing time fields with midnight and a
    /// missing date with 1970-01-01.
    #[must_use]
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        match (self.has_date, self.has_time) {
            (true, true) => NaiveDateTime::parse_from_str(value, &self.strftime).ok(),
            (true, false) => NaiveDate::parse_from_str(value, &self.strftime)
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN)),
            (false, true) => NaiveTime::parse_from_str(value, &self.strftime)
                .ok()
                .map(|time| NaiveDate::default().and_time(time)),
            (false, false) => None,
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// Parses `value` with the LDML `format`.
#[must_use]
pub fn parse_date(value: &str, format: &str) -> Option<NaiveDateTime> {
    DateFormat::new(format).parse(value)
}

/// `value` parses as a date in `format`.
#[must_use]
pub fn is_date(value: &str, format: &str) -> bool {
    parse_date(value, format).is_some()
}

/// `value` is strictly later than `date`, both in `format`.
///
/// An unparseable `date` rejects every value.
#[must_use]
pub fn is_after(value: &str, date: &str, format: &str) -> bool {
    let format = DateFormat::new(format);
    match (format.parse(value), format.parse(date)) {
        (Some(value), Some(date)) => value > date,
        _ => false,
    }
}

/// `value` is strictly earlier than `date`, both in `format`.
///
/// An unparseable `date` rejects every value.
#[must_use]
pub fn is_before(value: &str, date: &str, format: &str) -> bool {
    let format = DateFormat::new(format);
    match (format.parse(value), format.parse(date)) {
        (Some(value), Some(date)) => value < date,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_common_patterns() {
        assert_eq!(DateFormat::new("dd/MM/yyyy").strftime(), "%d/%m/%Y");
        assert_eq!(DateFormat::new("yyyy-MM-dd HH:mm").strftime(), "%Y-%m-%d %H:%M");
        assert_eq!(DateFormat::new("d MMM yy").strftime(), "%d %b %y");
    }

    #[test]
    fn quoted_literals() {
        assert_eq!(DateFormat::new("yyyy'T'HH").strftime(), "%YT%H");
        assert_eq!(DateFormat::new("HH 'o''clock'").strftime(), "%H o'clock");
        assert_eq!(DateFormat::new("dd%MM").strftime(), "%d%%%m");
    }

    #[test]
    fn parses_dates() {
        assert!(is_date("25/09/1987", "dd/MM/yyyy"));
        assert!(is_date("02/06/1946", "dd/MM/yyyy"));
        assert!(!is_date("test", "dd/MM/yyyy"));
        assert!(!is_date("31/02/2000", "dd/MM/yyyy"));
        assert!(is_date("2024-01-31 23:59", "yyyy-MM-dd HH:mm"));
    }

    #[test]
    fn compares_dates() {
        assert!(is_after("28/03/1994", "25/09/1987", "dd/MM/yyyy"));
        assert!(!is_after("02/06/1946", "25/09/1987", "dd/MM/yyyy"));
        assert!(is_before("25/09/1987", "29/03/1994", "dd/MM/yyyy"));
        assert!(!is_before("30/03/1994", "29/03/1994", "dd/MM/yyyy"));
        assert!(!is_before("29/03/1994", "29/03/1994", "dd/MM/yyyy"));
    }

    #[test]
    fn bad_reference_date_rejects() {
        assert!(!is_after("28/03/1994", "not a date", "dd/MM/yyyy"));
    }
}
