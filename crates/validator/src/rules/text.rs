//! Text rules: length, membership, character classes, case and patterns.

use crate::foundation::{FieldTag, ValidationError};
use crate::primitives::{self, FullMatch};
use crate::rules::{Check, Rule};

crate::rule! {
    /// The value contains `seed`.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { seed: String };
    check(self, value) { primitives::contains(value, &self.seed) }
    error(self, tag) { ValidationError::Contains { tag, seed: self.seed.clone() } }
    fn contains(seed: impl Into<String>) { Contains { seed: seed.into() } }
}

crate::rule! {
    /// The value equals `expected`.
    #[derive(PartialEq, Eq, Hash)]
    pub Equals { expected: String };
    check(self, value) { primitives::equals(value, &self.expected) }
    error(self, tag) { ValidationError::Equals { tag, expected: self.expected.clone() } }
    fn equals(expected: impl Into<String>) { Equals { expected: expected.into() } }
}

crate::rule! {
    /// Exactly `length` chars.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize };
    check(self, value) { primitives::exact_length(value, self.length) }
    error(self, tag) { ValidationError::ExactLength { tag, length: self.length } }
    fn exact_length(length: usize) { ExactLength { length } }
}

crate::rule! {
    /// At most `length` chars.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { length: usize };
    check(self, value) { primitives::max_length(value, self.length) }
    error(self, tag) { ValidationError::MaxLength { tag, length: self.length } }
    fn max_length(length: usize) { MaxLength { length } }
}

crate::rule! {
    /// At least `length` chars.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { length: usize };
    check(self, value) { primitives::min_length(value, self.length) }
    error(self, tag) { ValidationError::MinLength { tag, length: self.length } }
    fn min_length(length: usize) { MinLength { length } }
}

crate::rule! {
    /// Not the empty string. `" "` passes.
    pub Required;
    check(value) { primitives::required(value) }
    error(tag) { ValidationError::Required { tag } }
    fn required();
}

crate::rule! {
    /// The empty string.
    pub IsEmpty;
    check(value) { primitives::is_empty(value) }
    error(tag) { ValidationError::IsEmpty { tag } }
    fn is_empty();
}

crate::rule! {
    pub IsAscii;
    check(value) { primitives::is_ascii(value) }
    error(tag) { ValidationError::IsAscii { tag } }
    fn is_ascii();
}

crate::rule! {
    pub IsAlpha;
    check(value) { primitives::is_alpha(value) }
    error(tag) { ValidationError::IsAlpha { tag } }
    fn is_alpha();
}

crate::rule! {
    pub IsAlphanumeric;
    check(value) { primitives::is_alphanumeric(value) }
    error(tag) { ValidationError::IsAlphanumeric { tag } }
    fn is_alphanumeric();
}

crate::rule! {
    pub IsLowercase;
    check(value) { primitives::is_lowercase(value) }
    error(tag) { ValidationError::IsLowercase { tag } }
    fn is_lowercase();
}

crate::rule! {
    pub IsUppercase;
    check(value) { primitives::is_uppercase(value) }
    error(tag) { ValidationError::IsUppercase { tag } }
    fn is_uppercase();
}

crate::rule! {
    /// The whole value matches `pattern`.
    ///
    /// A malformed pattern is logged once, at construction, and the rule then
    /// rejects every present value.
    #[derive(PartialEq, Eq)]
    pub Pattern { matcher: FullMatch };
    check(self, value) { self.matcher.is_match(value) }
    error(self, tag) { ValidationError::Regex { tag, pattern: self.matcher.source().to_string() } }
    fn regex(pattern: impl Into<String>) {
        let matcher = FullMatch::new(pattern);
        if let Some(error) = matcher.compile_error() {
            tracing::warn!(
                pattern = matcher.source(),
                %error,
                "invalid regex pattern, rule will reject every value"
            );
        }
        Pattern { matcher }
    }
}

// ============================================================================
// IS IN
// ============================================================================

/// The value is one of `values`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IsIn {
    pub values: Vec<String>,
}

impl Check for IsIn {
    fn check(&self, value: &str) -> bool {
        primitives::is_in(value, &self.values)
    }

    fn error(&self, tag: FieldTag) -> ValidationError {
        ValidationError::IsIn {
            tag,
            values: self.values.clone(),
        }
    }
}

/// Membership in a fixed list of strings.
#[must_use]
pub fn is_in<I, S>(values: I) -> Rule<IsIn>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Rule::new(IsIn {
        values: values.into_iter().map(Into::into).collect(),
    })
}

// ============================================================================
// IS NIL
// ============================================================================

/// Accepts only absent input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsNil;

impl Check for IsNil {
    fn check(&self, _value: &str) -> bool {
        false
    }

    fn check_absent(&self, _nil_response: bool) -> bool {
        true
    }

    fn error(&self, tag: FieldTag) -> ValidationError {
        ValidationError::IsNil { tag }
    }
}

/// Passes only when the value is absent; any present value, even `""`,
/// fails.
#[must_use]
pub fn is_nil() -> Rule<IsNil> {
    Rule::new(IsNil)
}
