//! `verity check`

use anyhow::Context;
use serde_json::{Map, Value};
use verity_validator::config::RuleConfig;
use verity_validator::foundation::Validate;

use crate::cli::CheckArgs;
use crate::report::Report;

pub fn run(args: CheckArgs, json: bool) -> anyhow::Result<bool> {
    let rule = rule_config(&args)?;
    let decision = rule.build().validate(args.value.as_deref());
    tracing::debug!(rule = %args.rule, valid = decision.is_valid(), "rule checked");

    let report = Report::new(None, args.value.as_deref(), &decision);
    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{report}");
    }
    Ok(!report.is_invalid())
}

/// Assembles `{"rule": .., params.., "tag": .., "nil_response": ..}` and
/// reads it as a rule definition.
fn rule_config(args: &CheckArgs) -> anyhow::Result<RuleConfig> {
    let mut object = Map::new();
    object.insert("rule".into(), Value::String(args.rule.clone()));
    for (key, value) in &args.params {
        object.insert(key.clone(), value.clone());
    }
    if let Some(tag) = &args.tag {
        object.insert("tag".into(), Value::String(tag.clone()));
    }
    object.insert("nil_response".into(), Value::Bool(args.nil_response));

    serde_json::from_value(Value::Object(object))
        .with_context(|| format!("cannot build rule `{}`", args.rule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use verity_validator::config::RuleKind;

    fn args(rule: &str, params: &[(&str, Value)]) -> CheckArgs {
        CheckArgs {
            rule: rule.into(),
            value: None,
            params: params
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
            tag: Some("pin".into()),
            nil_response: true,
        }
    }

    #[test]
    fn params_become_rule_fields() {
        let rule = rule_config(&args("exact_length", &[("length", json!(4))])).unwrap();
        assert_eq!(
            rule,
            RuleConfig::new(RuleKind::ExactLength { length: 4 })
                .with_tag("pin")
                .with_nil_response(true)
        );
    }

    #[test]
    fn unknown_rule_names_the_rule() {
        let err = rule_config(&args("is_shiny", &[])).unwrap_err();
        assert!(err.to_string().contains("is_shiny"));
    }
}
