//! Property-based tests for the outcome fold.

use proptest::prelude::*;
use verity_validator::prelude::*;

fn error() -> impl Strategy<Value = ValidationError> {
    (0usize..4, proptest::option::of("[a-z]{1,6}")).prop_map(|(length, tag)| {
        ValidationError::MinLength { tag, length }
    })
}

fn decision() -> impl Strategy<Value = Decision> {
    prop_oneof![
        Just(Outcome::Valid),
        (proptest::option::of("[a-z]{0,6}"), error())
            .prop_map(|(value, error)| Outcome::Coerced(value, error)),
        error().prop_map(Outcome::Invalid),
    ]
}

// ============================================================================
// MONOID LAWS
// ============================================================================

proptest! {
    #[test]
    fn combine_is_associative(a in decision(), b in decision(), c in decision()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn valid_is_identity(a in decision()) {
        prop_assert_eq!(Outcome::Valid.combine(a.clone()), a.clone());
        prop_assert_eq!(a.clone().combine(Outcome::Valid), a);
    }

    #[test]
    fn fold_matches_pairwise_combine(items in proptest::collection::vec(decision(), 0..8)) {
        let pairwise = items
            .iter()
            .cloned()
            .fold(Outcome::Valid, Outcome::combine);
        prop_assert_eq!(fold(items), pairwise);
    }
}

// ============================================================================
// LEFT BIAS: the first invalid outcome is the one reported
// ============================================================================

proptest! {
    #[test]
    fn first_invalid_wins(items in proptest::collection::vec(decision(), 1..8)) {
        let first_invalid = items.iter().find(|d| d.is_invalid()).cloned();
        let folded = fold(items.clone());
        match first_invalid {
            Some(expected) => prop_assert_eq!(folded, expected),
            None => prop_assert!(!folded.is_invalid()),
        }
    }

    #[test]
    fn invalid_absorbs_everything_to_its_right(e in error(), rest in decision()) {
        let invalid = Outcome::Invalid(e);
        prop_assert_eq!(invalid.clone().combine(rest), invalid);
    }
}

// ============================================================================
// COMBINED RULES: combined fails iff some rule fails
// ============================================================================

proptest! {
    #[test]
    fn combined_fails_iff_any_rule_fails(s in ".{0,40}") {
        let rules = [min_length(3).boxed(), max_length(10).boxed(), is_ascii().boxed()];
        let any_fails = rules.iter().any(|r| r.validate(Some(s.as_str())).is_invalid());
        let combined = Combined::new(rules.to_vec());
        prop_assert_eq!(combined.validate(Some(s.as_str())).is_invalid(), any_fails);
    }

    #[test]
    fn rules_are_idempotent(s in ".*") {
        let rule = is_email();
        prop_assert_eq!(rule.validate(Some(s.as_str())), rule.validate(Some(s.as_str())));
    }

    #[test]
    fn nil_response_only_affects_absent_input(s in ".{0,12}", nil in any::<bool>()) {
        let strict = min_length(4);
        let relaxed = min_length(4).nil_response(nil);
        prop_assert_eq!(strict.validate(Some(s.as_str())), relaxed.validate(Some(s.as_str())));
        prop_assert_eq!(relaxed.validate(None).is_valid(), nil);
    }
}
