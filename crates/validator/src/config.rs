//! Declarative rule and form definitions.
//!
//! Rules are pure data here: a [`RuleKind`] names a catalogue entry and its
//! parameters, a [`RuleConfig`] adds the tag and `nil_response`, and
//! [`RuleConfig::build`] turns it into a runnable [`BoxValidator`].
//!
//! ```toml
//! [[fields]]
//! name = "password"
//!
//! [[fields.rules]]
//! rule = "required"
//!
//! [[fields.rules]]
//! rule = "min_length"
//! length = 8
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize};

use crate::combinators::Combined;
use crate::foundation::{BoxValidator, Decision, FieldTag, Validate};
use crate::primitives::{FqdnOptions, IsbnVersion, Phone, PostalCode};
use crate::rules::{self, Check, DEFAULT_DATE_FORMAT, Rule};

/// Errors raised while loading or applying a form definition.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The TOML document is malformed or does not describe a form.
    #[error("invalid form definition: {0}")]
    Toml(#[from] toml::de::Error),

    /// The JSON document is malformed or does not describe a form.
    #[error("invalid form definition: {0}")]
    Json(#[from] serde_json::Error),

    /// Two fields share a name.
    #[error("field `{0}` is defined more than once")]
    DuplicateField(String),

    /// A value was supplied for a field the form does not define.
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

// ============================================================================
// RULE KIND
// ============================================================================

/// One catalogue rule and its parameters.
///
/// Serialized internally tagged on `rule`, e.g.
/// `{ "rule": "min_length", "length": 8 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleKind {
    Contains {
        #[serde(deserialize_with = "lenient_string")]
        seed: String,
    },
    Equals {
        #[serde(deserialize_with = "lenient_string")]
        expected: String,
    },
    ExactLength {
        length: usize,
    },
    IsAfter {
        #[serde(deserialize_with = "lenient_string")]
        date: String,
        #[serde(default = "default_date_format")]
        format: String,
    },
    IsAlpha,
    IsAlphanumeric,
    IsAscii,
    IsBase64,
    IsBefore {
        #[serde(deserialize_with = "lenient_string")]
        date: String,
        #[serde(default = "default_date_format")]
        format: String,
    },
    IsBool,
    IsCreditCard,
    IsDate {
        #[serde(default = "default_date_format")]
        format: String,
    },
    IsEmail,
    IsEmpty,
    IsFalse,
    IsFloat,
    IsFqdn {
        #[serde(default)]
        options: FqdnOptions,
    },
    IsHexColor,
    IsHexadecimal,
    IsIn {
        #[serde(deserialize_with = "lenient_strings")]
        values: Vec<String>,
    },
    IsInt,
    IsIp,
    IsIpv4,
    IsIpv6,
    IsIsbn {
        version: IsbnVersion,
    },
    IsLowercase,
    IsMongoId,
    IsNil,
    IsNumeric,
    IsPhone {
        locale: Phone,
    },
    IsPostalCode {
        country: PostalCode,
    },
    IsTrue,
    IsUppercase,
    IsUuid,
    MaxLength {
        length: usize,
    },
    MinLength {
        length: usize,
    },
    Regex {
        pattern: String,
    },
    Required,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Scalars accepted where a string parameter is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Scalar::deserialize(deserializer).map(Scalar::into_string)
}

fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let scalars = Vec::<Scalar>::deserialize(deserializer)?;
    Ok(scalars.into_iter().map(Scalar::into_string).collect())
}

// ============================================================================
// RULE CONFIG
// ============================================================================

/// A [`RuleKind`] with its tag and `nil_response`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(flatten)]
    pub kind: RuleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: FieldTag,
    #[serde(default)]
    pub nil_response: bool,
}

impl From<RuleKind> for RuleConfig {
    fn from(kind: RuleKind) -> Self {
        Self::new(kind)
    }
}

impl RuleConfig {
    /// An untagged rule that rejects absent input.
    #[must_use]
    pub const fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            tag: None,
            nil_response: false,
        }
    }

    /// Sets the tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Sets `nil_response`.
    #[must_use]
    pub const fn with_nil_response(mut self, nil_response: bool) -> Self {
        self.nil_response = nil_response;
        self
    }

    /// Builds the runnable rule.
    #[must_use]
    pub fn build(&self) -> BoxValidator {
        self.build_tagged(self.tag.clone())
    }

    fn build_tagged(&self, tag: FieldTag) -> BoxValidator {
        let nil = self.nil_response;
        match &self.kind {
            RuleKind::Contains { seed } => finish(rules::contains(seed.as_str()), tag, nil),
            RuleKind::Equals { expected } => finish(rules::equals(expected.as_str()), tag, nil),
            RuleKind::ExactLength { length } => finish(rules::exact_length(*length), tag, nil),
            RuleKind::IsAfter { date, format } => {
                finish(rules::is_after_in(date.as_str(), format), tag, nil)
            }
            RuleKind::IsAlpha => finish(rules::is_alpha(), tag, nil),
            RuleKind::IsAlphanumeric => finish(rules::is_alphanumeric(), tag, nil),
            RuleKind::IsAscii => finish(rules::is_ascii(), tag, nil),
            RuleKind::IsBase64 => finish(rules::is_base64(), tag, nil),
            RuleKind::IsBefore { date, format } => {
                finish(rules::is_before_in(date.as_str(), format), tag, nil)
            }
            RuleKind::IsBool => finish(rules::is_bool(), tag, nil),
            RuleKind::IsCreditCard => finish(rules::is_credit_card(), tag, nil),
            RuleKind::IsDate { format } => finish(rules::is_date_in(format), tag, nil),
            RuleKind::IsEmail => finish(rules::is_email(), tag, nil),
            RuleKind::IsEmpty => finish(rules::is_empty(), tag, nil),
            RuleKind::IsFalse => finish(rules::is_false(), tag, nil),
            RuleKind::IsFloat => finish(rules::is_float(), tag, nil),
            RuleKind::IsFqdn { options } => finish(rules::is_fqdn_with(*options), tag, nil),
            RuleKind::IsHexColor => finish(rules::is_hex_color(), tag, nil),
            RuleKind::IsHexadecimal => finish(rules::is_hexadecimal(), tag, nil),
            RuleKind::IsIn { values } => finish(rules::is_in(values.iter().cloned()), tag, nil),
            RuleKind::IsInt => finish(rules::is_int(), tag, nil),
            RuleKind::IsIp => finish(rules::is_ip(), tag, nil),
            RuleKind::IsIpv4 => finish(rules::is_ipv4(), tag, nil),
            RuleKind::IsIpv6 => finish(rules::is_ipv6(), tag, nil),
            RuleKind::IsIsbn { version } => finish(rules::is_isbn(*version), tag, nil),
            RuleKind::IsLowercase => finish(rules::is_lowercase(), tag, nil),
            RuleKind::IsMongoId => finish(rules::is_mongo_id(), tag, nil),
            RuleKind::IsNil => finish(rules::is_nil(), tag, nil),
            RuleKind::IsNumeric => finish(rules::is_numeric(), tag, nil),
            RuleKind::IsPhone { locale } => finish(rules::is_phone(*locale), tag, nil),
            RuleKind::IsPostalCode { country } => {
                finish(rules::is_postal_code(*country), tag, nil)
            }
            RuleKind::IsTrue => finish(rules::is_true(), tag, nil),
            RuleKind::IsUppercase => finish(rules::is_uppercase(), tag, nil),
            RuleKind::IsUuid => finish(rules::is_uuid(), tag, nil),
            RuleKind::MaxLength { length } => finish(rules::max_length(*length), tag, nil),
            RuleKind::MinLength { length } => finish(rules::min_length(*length), tag, nil),
            RuleKind::Regex { pattern } => finish(rules::regex(pattern.as_str()), tag, nil),
            RuleKind::Required => finish(rules::required(), tag, nil),
        }
    }
}

fn finish<C: Check + 'static>(rule: Rule<C>, tag: FieldTag, nil_response: bool) -> BoxValidator {
    rule.field_tag(tag).nil_response(nil_response).boxed()
}

// ============================================================================
// FORMS
// ============================================================================

/// A named input with its rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl FieldConfig {
    /// Every rule of the field folded into one validator.
    ///
    /// Rules without their own tag are tagged with the field name.
    #[must_use]
    pub fn validator(&self) -> Combined<BoxValidator> {
        self.rules
            .iter()
            .map(|rule| {
                let tag = rule.tag.clone().or_else(|| Some(self.name.clone()));
                rule.build_tagged(tag)
            })
            .collect()
    }
}

/// A set of fields loaded from TOML or JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

/// The decision for one field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecision {
    pub name: String,
    pub decision: Decision,
}

impl FormConfig {
    /// Parses a TOML form definition.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let form: Self = toml::from_str(source)?;
        form.check_unique()?;
        Ok(form)
    }

    /// Parses a JSON form definition.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let form: Self = serde_json::from_str(source)?;
        form.check_unique()?;
        Ok(form)
    }

    fn check_unique(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(ConfigError::DuplicateField(field.name.clone()));
            }
        }
        Ok(())
    }

    /// Looks a field up by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Validates `values` field by field, in definition order.
    ///
    /// Fields missing from `values` are validated as absent input.
    pub fn validate(
        &self,
        values: &HashMap<String, String>,
    ) -> Result<Vec<FieldDecision>, ConfigError> {
        if let Some(unknown) = values.keys().find(|name| self.field(name).is_none()) {
            return Err(ConfigError::UnknownField(unknown.clone()));
        }

        let decisions: Vec<_> = self
            .fields
            .iter()
            .map(|field| FieldDecision {
                name: field.name.clone(),
                decision: field
                    .validator()
                    .validate(values.get(&field.name).map(String::as_str)),
            })
            .collect();

        tracing::debug!(
            fields = decisions.len(),
            invalid = decisions.iter().filter(|d| d.decision.is_invalid()).count(),
            "form validated"
        );
        Ok(decisions)
    }
}
