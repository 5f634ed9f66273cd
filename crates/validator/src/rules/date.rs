//! Date rules. Formats are LDML patterns such as `dd/MM/yyyy`.

use crate::foundation::ValidationError;
use crate::primitives::{self, DateFormat};
use crate::rules::{DEFAULT_DATE_FORMAT, Rule};

crate::rule! {
    /// The value parses as a date in `format`.
    #[derive(PartialEq, Eq, Hash)]
    pub IsDate { format: DateFormat };
    check(self, value) { self.format.parse(value).is_some() }
    error(self, tag) { ValidationError::IsDate { tag, format: self.format.pattern().to_string() } }
    fn is_date_in(format: &str) { IsDate { format: DateFormat::new(format) } }
}

crate::rule! {
    /// The value is a date strictly after `date`.
    #[derive(PartialEq, Eq, Hash)]
    pub IsAfter { date: String, format: DateFormat };
    check(self, value) { primitives::is_after(value, &self.date, self.format.pattern()) }
    error(self, tag) {
        ValidationError::IsAfter {
            tag,
            date: self.date.clone(),
            format: self.format.pattern().to_string(),
        }
    }
    fn is_after_in(date: impl Into<String>, format: &str) {
        IsAfter { date: date.into(), format: DateFormat::new(format) }
    }
}

crate::rule! {
    /// The value is a date strictly before `date`.
    #[derive(PartialEq, Eq, Hash)]
    pub IsBefore { date: String, format: DateFormat };
    check(self, value) { primitives::is_before(value, &self.date, self.format.pattern()) }
    error(self, tag) {
        ValidationError::IsBefore {
            tag,
            date: self.date.clone(),
            format: self.format.pattern().to_string(),
        }
    }
    fn is_before_in(date: impl Into<String>, format: &str) {
        IsBefore { date: date.into(), format: DateFormat::new(format) }
    }
}

/// A date in [`DEFAULT_DATE_FORMAT`].
#[must_use]
pub fn is_date() -> Rule<IsDate> {
    is_date_in(DEFAULT_DATE_FORMAT)
}

/// A date after `date`, both in [`DEFAULT_DATE_FORMAT`].
#[must_use]
pub fn is_after(date: impl Into<String>) -> Rule<IsAfter> {
    is_after_in(date, DEFAULT_DATE_FORMAT)
}

/// A date before `date`, both in [`DEFAULT_DATE_FORMAT`].
#[must_use]
pub fn is_before(date: impl Into<String>) -> Rule<IsBefore> {
    is_before_in(date, DEFAULT_DATE_FORMAT)
}
