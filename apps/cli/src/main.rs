//! `verity`: run validation rules from the command line.
//!
//! Commands:
//! - `verity check <RULE> [VALUE]`: run one rule
//! - `verity form <FILE>`: validate values against a form definition
//! - `verity demo`: fill in the sign-up form and submit it
//!
//! Exit codes:
//! - 0: valid
//! - 1: invalid
//! - 2: usage or configuration error

mod cli;
mod commands;
mod report;
mod settings;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::settings::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
    let settings = Settings::load(&cli)?;
    let _guard =
        verity_log::init_with(settings.log_config()).context("cannot initialize logging")?;
    tracing::debug!(?settings, "settings loaded");

    let json = settings.json;
    match cli.command {
        Command::Check(args) => commands::check::run(args, json),
        Command::Form(args) => commands::form::run(args, json),
        Command::Demo(args) => commands::demo::run(args, json).await,
    }
}
