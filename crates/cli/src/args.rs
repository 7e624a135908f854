//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read selection defaults from `CHAINPROFILE_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load definitions (see `main()`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chainprofile")]
#[command(about = "Resolve network profiles for smart-contract deployments", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  chainprofile resolve\n  chainprofile resolve sepolia --output json\n  chainprofile --config chainprofile.yaml list\n  CHAINPROFILE_DEVELOPMENT_PORT=7545 chainprofile resolve development\n  chainprofile validate\n"
)]
pub struct Cli {
    /// Path to the definitions file (defaults to chainprofile.json)
    #[arg(long, global = true, env = "CHAINPROFILE_CONFIG_PATH", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Compiler entry to use when the definitions pin several
    #[arg(long, global = true, env = "CHAINPROFILE_COMPILER", value_name = "TOOL")]
    pub compiler: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one profile and print the result
    Resolve {
        /// Profile to resolve (defaults to development)
        #[arg(env = "CHAINPROFILE_NETWORK")]
        network: Option<String>,
    },

    /// List defined profiles
    List,

    /// Resolve every profile and report failures
    Validate,
}

impl Cli {
    /// The `--config` path, ignoring blank values.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config
            .as_ref()
            .filter(|path| !path.to_string_lossy().trim().is_empty())
            .cloned()
    }
}
