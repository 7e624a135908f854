//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Loading the project (see `main()`).

use anyhow::Result;
use chainprofile_config::LoadedProject;
use chainprofile_config::constants::DEFAULT_PROFILE_NAME;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli, project: &LoadedProject) -> Result<()> {
    match cli.command {
        Commands::Resolve { network } => {
            let network = network.as_deref().unwrap_or(DEFAULT_PROFILE_NAME);
            commands::resolve::run(project, network, &cli.output)
        }
        Commands::List => commands::list::run(project, &cli.output),
        Commands::Validate => commands::validate::run(project, &cli.output),
    }
}
