//! chainprofile - resolve network profiles for smart-contract deployments.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the definitions file once and hand the project to a command.
//! - Report load warnings and map errors to structured exit codes.
//!
//! Does NOT handle:
//! - Placeholder substitution, overrides or validation (see `crates/config`).
//! - Constructing provider transports or running deployments.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use chainprofile_config::{ConfigLoader, Environment};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut loader = ConfigLoader::new().with_environment(Environment::from_process());
    if let Some(path) = cli.config_path() {
        loader = loader.with_config_path(path);
    }
    if let Some(ref tool) = cli.compiler {
        loader = loader.with_compiler(tool.clone());
    }
    let loader = loader.from_env();

    tracing::debug!(
        "Loading definitions from {}",
        loader.effective_config_path().display()
    );

    let project = match loader.load() {
        Ok(project) => project,
        Err(e) => {
            eprintln!("Failed to load definitions: {}", e);
            std::process::exit(ExitCode::from(&e).as_i32());
        }
    };

    for warning in project.warnings() {
        tracing::warn!("{}", warning);
    }

    let exit_code = match run_command(cli, &project) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
