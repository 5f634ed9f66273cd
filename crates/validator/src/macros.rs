//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: declare a check (struct + `Check` impl + factory fn returning a `Rule`)
//! - [`combine!`]: fold a fixed list of validators into one
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::rule;
//! use verity_validator::foundation::ValidationError;
//!
//! // Unit check (no fields)
//! rule! {
//!     pub IsEmail;
//!     check(value) { primitives::is_email(value) }
//!     error(tag) { ValidationError::IsEmail { tag } }
//!     fn is_email();
//! }
//!
//! // Check with parameters
//! rule! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { length: usize };
//!     check(self, value) { primitives::min_length(value, self.length) }
//!     error(self, tag) { ValidationError::MinLength { tag, length: self.length } }
//!     fn min_length(length: usize) { MinLength { length } }
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a check type, its [`Check`](crate::rules::Check) implementation,
/// and a factory returning a [`Rule`](crate::rules::Rule) with no tag and
/// `nil_response == false`.
///
/// `#[derive(Debug, Clone)]` is always applied. Unit checks additionally
/// derive `Copy`, `PartialEq`, `Eq`, `Hash` and `Default`; add extra derives
/// to parameterised checks via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit check** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub IsUuid;
///     check(value) { primitives::is_uuid(value) }
///     error(tag) { ValidationError::IsUuid { tag } }
///     fn is_uuid();
/// }
/// ```
///
/// **Check with fields** (factory body builds the check):
/// ```rust,ignore
/// rule! {
///     #[derive(PartialEq, Eq, Hash)]
///     pub Contains { seed: String };
///     check(self, value) { primitives::contains(value, &self.seed) }
///     error(self, tag) { ValidationError::Contains { tag, seed: self.seed.clone() } }
///     fn contains(seed: impl Into<String>) { Contains { seed: seed.into() } }
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1: Unit check + factory fn ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($val:ident) $check:block
        error($tag:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::rules::Check for $name {
            fn check(&self, $val: &str) -> bool $check

            fn error(&self, $tag: $crate::foundation::FieldTag) -> $crate::foundation::ValidationError $err
        }

        #[must_use]
        $vis fn $factory() -> $crate::rules::Rule<$name> {
            $crate::rules::Rule::new($name)
        }
    };

    // ── Variant 2: Check with fields + factory fn ────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $val:ident) $check:block
        error($self2:ident, $tag:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) $body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $crate::rules::Check for $name {
            fn check(&$self_, $val: &str) -> bool $check

            fn error(&$self2, $tag: $crate::foundation::FieldTag) -> $crate::foundation::ValidationError $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $crate::rules::Rule<$name> {
            $crate::rules::Rule::new($body)
        }
    };
}

// ============================================================================
// COMBINE MACRO
// ============================================================================

/// Combines validators of different types into one
/// [`Combined`](crate::combinators::Combined).
///
/// Each argument is boxed, so rules, closures-backed validators and other
/// combinators can be mixed freely. Order is preserved.
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let email = combine![
///     required().tag("email"),
///     is_email().tag("email"),
///     max_length(32).tag("email"),
/// ];
/// assert!(email.validate(Some("a@b.com")).is_valid());
/// ```
#[macro_export]
macro_rules! combine {
    () => {
        $crate::combinators::Combined::<$crate::foundation::BoxValidator>::default()
    };
    ($($validator:expr),+ $(,)?) => {
        $crate::combinators::Combined::new(::std::vec![
            $($crate::foundation::Validate::boxed($validator)),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{FieldTag, Outcome, Validate, ValidationError};
    use crate::rules::Rule;

    rule! {
        /// Test check: value starts with `x`.
        pub StartsWithX;
        check(value) { value.starts_with('x') }
        error(tag) { ValidationError::NotSpecified { tag } }
        fn starts_with_x();
    }

    rule! {
        #[derive(PartialEq, Eq)]
        pub LongerThan { limit: usize };
        check(self, value) { value.len() > self.limit }
        error(self, tag) { ValidationError::MinLength { tag, length: self.limit + 1 } }
        fn longer_than(limit: usize) { LongerThan { limit } }
    }

    #[test]
    fn unit_rule_factory() {
        let rule: Rule<StartsWithX> = starts_with_x();
        assert!(rule.validate(Some("xyz")).is_valid());
        assert_eq!(
            rule.validate(Some("abc")),
            Outcome::Invalid(ValidationError::NotSpecified { tag: None })
        );
    }

    #[test]
    fn struct_rule_factory_and_tag() {
        let rule = longer_than(2).tag("name");
        let tag: FieldTag = Some("name".into());
        assert_eq!(
            rule.validate(Some("ab")),
            Outcome::Invalid(ValidationError::MinLength { tag, length: 3 })
        );
    }

    #[test]
    fn combine_macro_mixes_types() {
        let combined = combine![starts_with_x(), longer_than(2)];
        assert_eq!(combined.len(), 2);
        assert!(combined.validate(Some("xylophone")).is_valid());
        assert!(combined.validate(Some("xy")).is_invalid());
    }

    #[test]
    fn empty_combine_macro_is_valid() {
        let combined = combine![];
        assert!(combined.validate(None).is_valid());
    }
}
