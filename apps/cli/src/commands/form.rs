//! `verity form`

use std::collections::HashMap;
use std::fs;

use anyhow::Context;
use verity_validator::config::FormConfig;

use crate::cli::FormArgs;
use crate::report::Report;

pub fn run(args: FormArgs, json: bool) -> anyhow::Result<bool> {
    let source = fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    let form = FormConfig::from_toml_str(&source)
        .with_context(|| format!("invalid form definition in {}", args.file.display()))?;

    let values: HashMap<String, String> = args.values.into_iter().collect();
    let decisions = form.validate(&values)?;

    let reports: Vec<Report<'_>> = decisions
        .iter()
        .map(|field| {
            let value = values.get(&field.name).map(String::as_str);
            Report::new(Some(field.name.as_str()), value, &field.decision)
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string(&reports)?);
    } else {
        for report in &reports {
            println!("{report}");
        }
    }
    Ok(!reports.iter().any(Report::is_invalid))
}
