//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use verity_log::Format;

/// Validate strings and forms with the verity rule catalogue.
#[derive(Parser, Debug)]
#[command(name = "verity", version)]
#[command(
    long_about = "Validate strings and forms with the verity rule catalogue.\n\n\
    Settings are layered: built-in defaults, then verity.toml (or --config), \
    then VERITY_LOG_LEVEL / VERITY_LOG_FORMAT / VERITY_JSON, then flags.\n\n\
    Exit codes: 0 valid, 1 invalid, 2 usage or configuration error."
)]
pub struct Cli {
    /// Log filter directive (e.g. "debug", "verity_validator=trace")
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Log output format: pretty, compact or json
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<Format>,

    /// Settings file to use instead of ./verity.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one rule against a value
    Check(CheckArgs),

    /// Validate values against a form definition
    Form(FormArgs),

    /// Fill in the sign-up form and try to submit it
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Rule name, e.g. min_length or is_email
    pub rule: String,

    /// Value to check; absent when omitted
    pub value: Option<String>,

    /// Rule parameter as key=value; the value is read as JSON when it parses
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, Value)>,

    /// Field tag shown in the error message
    #[arg(long)]
    pub tag: Option<String>,

    /// Accept absent input
    #[arg(long)]
    pub nil_response: bool,
}

#[derive(Args, Debug)]
pub struct FormArgs {
    /// Form definition (TOML)
    pub file: PathBuf,

    /// Field value as name=value
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub values: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub accept_terms: Option<String>,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_param(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = parse_assignment(raw)?;
    let value = serde_json::from_str(&value).unwrap_or(Value::String(value));
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn params_prefer_json() {
        assert_eq!(parse_param("length=8").unwrap(), ("length".into(), json!(8)));
        assert_eq!(
            parse_param("values=[\"a\",\"b\"]").unwrap(),
            ("values".into(), json!(["a", "b"]))
        );
        assert_eq!(
            parse_param("date=2020-01-01").unwrap(),
            ("date".into(), json!("2020-01-01"))
        );
    }

    #[test]
    fn assignments_split_on_first_equals() {
        assert_eq!(
            parse_assignment("q=a=b").unwrap(),
            ("q".to_string(), "a=b".to_string())
        );
        assert!(parse_assignment("novalue").is_err());
        assert!(parse_assignment("=x").is_err());
    }
}
