//! End-to-end scenarios: combined field rules and TOML form definitions.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use verity_validator::config::{ConfigError, FormConfig, RuleKind};
use verity_validator::prelude::*;

// ============================================================================
// PASSWORD FIELD
// ============================================================================

fn password() -> Combined<BoxValidator> {
    combine![
        required().tag("password"),
        min_length(8).tag("password"),
        max_length(32).tag("password"),
    ]
}

#[test]
fn password_accepts_reasonable_input() {
    assert_eq!(password().validate(Some("correct horse")), Outcome::Valid);
}

#[test]
fn password_reports_first_failure() {
    assert_eq!(
        password().validate(Some("")),
        Outcome::Invalid(ValidationError::Required {
            tag: Some("password".into())
        })
    );
    assert_eq!(
        password().validate(Some("short")),
        Outcome::Invalid(ValidationError::MinLength {
            tag: Some("password".into()),
            length: 8
        })
    );
    assert_eq!(
        password().validate(Some("x".repeat(33).as_str())),
        Outcome::Invalid(ValidationError::MaxLength {
            tag: Some("password".into()),
            length: 32
        })
    );
}

#[test]
fn password_absent_reports_required() {
    let decision = password().validate(None);
    assert_eq!(
        decision.error().map(ToString::to_string),
        Some("[password] is required".to_string())
    );
}

#[test]
fn combined_with_and_agrees_with_macro() {
    let chained = required()
        .tag("password")
        .and(min_length(8).tag("password"))
        .and(max_length(32).tag("password"));
    for input in [None, Some(""), Some("short"), Some("long enough")] {
        assert_eq!(chained.validate(input), password().validate(input));
    }
}

// ============================================================================
// TOML FORMS
// ============================================================================

const SIGNUP: &str = r#"
[[fields]]
name = "email"
hint = "you@example.com"

[[fields.rules]]
rule = "required"

[[fields.rules]]
rule = "is_email"

[[fields]]
name = "postcode"

[[fields.rules]]
rule = "is_postal_code"
country = "NL"
nil_response = true

[[fields]]
name = "isbn"

[[fields.rules]]
rule = "is_isbn"
version = 13
tag = "book"
nil_response = true
"#;

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn toml_form_parses() {
    let form = FormConfig::from_toml_str(SIGNUP).unwrap();
    assert_eq!(form.fields.len(), 3);

    let email = form.field("email").unwrap();
    assert_eq!(email.hint.as_deref(), Some("you@example.com"));
    assert_eq!(email.rules[1].kind, RuleKind::IsEmail);

    let postcode = form.field("postcode").unwrap();
    assert_eq!(
        postcode.rules[0].kind,
        RuleKind::IsPostalCode {
            country: PostalCode::NL
        }
    );
    assert!(postcode.rules[0].nil_response);
}

#[test]
fn toml_form_validates_each_field() {
    let form = FormConfig::from_toml_str(SIGNUP).unwrap();

    let report = form
        .validate(&values(&[("email", "a@b.com"), ("isbn", "9783836221190")]))
        .unwrap();
    let outcomes: Vec<_> = report
        .iter()
        .map(|field| (field.name.as_str(), field.decision.clone()))
        .collect();

    assert_eq!(
        outcomes,
        vec![
            ("email", Outcome::Valid),
            ("postcode", Outcome::Valid),
            (
                "isbn",
                Outcome::Invalid(ValidationError::IsIsbn {
                    tag: Some("book".into()),
                    version: IsbnVersion::V13
                })
            ),
        ]
    );
}

#[test]
fn missing_required_field_is_invalid() {
    let form = FormConfig::from_toml_str(SIGNUP).unwrap();
    let report = form.validate(&HashMap::new()).unwrap();
    assert_eq!(
        report[0].decision,
        Outcome::Invalid(ValidationError::Required {
            tag: Some("email".into())
        })
    );
}

#[test]
fn unknown_value_is_an_error() {
    let form = FormConfig::from_toml_str(SIGNUP).unwrap();
    let err = form.validate(&values(&[("nickname", "x")])).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownField(name) if name == "nickname"));
}

#[test]
fn unknown_rule_fails_to_parse() {
    let source = r#"
[[fields]]
name = "x"

[[fields.rules]]
rule = "is_banana"
"#;
    assert!(matches!(
        FormConfig::from_toml_str(source),
        Err(ConfigError::Toml(_))
    ));
}
