//! `verity demo`: the sign-up form.

use serde::Serialize;
use verity_property::prelude::*;
use verity_validator::combine;
use verity_validator::foundation::ValidateExt;
use verity_validator::rules::{is_bool, is_email, is_true, max_length, min_length, required};

use crate::cli::DemoArgs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
#[error("email or password missing")]
pub struct Incomplete;

type SignUpState = ((Option<String>, Option<String>), bool);

/// Email, password and terms fields with a submit action enabled while
/// email and password are valid.
pub struct SignUp {
    pub email: Field,
    pub password: Field,
    pub accept_terms: Field,
    pub is_valid: Property<bool>,
    pub submit: Action<SignUpState, Credentials, Incomplete>,
}

impl SignUp {
    pub fn new() -> Self {
        let email = ValidatingProperty::new(
            None,
            combine![required(), is_email(), min_length(3), max_length(32)].with_tag("email"),
        );
        let password = ValidatingProperty::new(
            None,
            combine![required(), min_length(8), max_length(32)].with_tag("password"),
        );
        let accept_terms = ValidatingProperty::new(
            None,
            combine![required(), is_bool(), is_true()].with_tag("accept terms"),
        );

        let is_valid = email
            .result()
            .map(ValidationResult::is_valid)
            .and(&password.result().map(ValidationResult::is_valid));

        let state = Property::combine_latest(&Property::combine_latest(&email, &password), &is_valid);
        let submit = Action::new(
            &state,
            |(_, valid): &SignUpState| *valid,
            |((email, password), _): SignUpState| async move {
                match (email, password) {
                    (Some(email), Some(password)) => Ok(Credentials { email, password }),
                    _ => Err(Incomplete),
                }
            },
        );

        Self {
            email: Field::new(0, Some("email"), email),
            password: Field::new(1, Some("password"), password),
            accept_terms: Field::new(2, Some("accept terms"), accept_terms),
            is_valid,
            submit,
        }
    }

    const fn fields(&self) -> [&Field; 3] {
        [&self.email, &self.password, &self.accept_terms]
    }
}

impl Default for SignUp {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
struct FieldState {
    id: usize,
    hint: Option<String>,
    value: Option<String>,
    has_errors: bool,
    error: Option<String>,
}

fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}

impl FieldState {
    fn of(field: &Field, secret: bool) -> Self {
        let value = field
            .value()
            .map(|v| if secret { mask(&v) } else { v });
        Self {
            id: field.id(),
            hint: field.hint().value(),
            value,
            has_errors: field.has_errors().value(),
            error: field.error_message().value(),
        }
    }
}

#[derive(Debug, Serialize)]
struct Submitted {
    email: String,
    password: String,
}

impl From<Credentials> for Submitted {
    fn from(credentials: Credentials) -> Self {
        Self {
            password: mask(&credentials.password),
            email: credentials.email,
        }
    }
}

#[derive(Debug, Serialize)]
struct Summary {
    fields: Vec<FieldState>,
    is_valid: bool,
    submitted: Option<Submitted>,
}

pub async fn run(args: DemoArgs, json: bool) -> anyhow::Result<bool> {
    let form = SignUp::new();
    for (field, value) in [
        (&form.email, args.email),
        (&form.password, args.password),
        (&form.accept_terms, args.accept_terms),
    ] {
        if value.is_some() {
            field.edit(value);
        }
    }

    let submitted = match form.submit.apply().await {
        Ok(credentials) => {
            tracing::info!(email = %credentials.email, "signed up");
            Some(Submitted::from(credentials))
        }
        Err(ActionError::Disabled) => None,
        Err(ActionError::Producer(error)) => return Err(error.into()),
    };

    let summary = Summary {
        fields: form
            .fields()
            .into_iter()
            .map(|field| FieldState::of(field, field.id() == form.password.id()))
            .collect(),
        is_valid: form.is_valid.value(),
        submitted,
    };

    if json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        print_text(&summary);
    }
    Ok(summary.submitted.is_some())
}

fn print_text(summary: &Summary) {
    for field in &summary.fields {
        let hint = field.hint.as_deref().unwrap_or("field");
        let value = field.value.as_deref().unwrap_or("");
        match &field.error {
            Some(error) => println!("{hint}: {value} ({error})"),
            None => println!("{hint}: {value}"),
        }
    }
    println!("form valid: {}", summary.is_valid);
    match &summary.submitted {
        Some(submitted) => println!("submitted: {}", submitted.email),
        None => println!("submit disabled"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn valid_form_submits() {
        let form = SignUp::new();
        form.email.edit(Some("ada@example.com".into()));
        form.password.edit(Some("correct horse".into()));

        assert!(form.submit.is_enabled().value());
        let credentials = form.submit.apply().await.unwrap();
        assert_eq!(
            credentials,
            Credentials {
                email: "ada@example.com".into(),
                password: "correct horse".into(),
            }
        );
    }

    #[tokio::test]
    async fn short_password_keeps_submit_disabled() {
        let form = SignUp::new();
        form.email.edit(Some("ada@example.com".into()));
        form.password.edit(Some("short".into()));

        assert!(!form.is_valid.value());
        assert_eq!(
            form.password.error_message().value(),
            Some("[password] must be at least 8 characters long".to_string())
        );
        assert!(matches!(form.submit.apply().await, Err(ActionError::Disabled)));
    }

    #[test]
    fn password_is_masked() {
        let form = SignUp::new();
        form.password.edit(Some("secret".into()));
        assert_eq!(
            FieldState::of(&form.password, true).value,
            Some("******".to_string())
        );
    }
}
