//! Resolve command implementation.

use anyhow::{Context, Result};
use chainprofile_config::LoadedProject;
use tracing::info;

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(project: &LoadedProject, network: &str, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    info!("Resolving profile '{}'", network);
    let resolved = project
        .resolve(network)
        .with_context(|| format!("Failed to resolve profile '{}'", network))?;

    let output = get_formatter(format).format_resolved(&resolved)?;
    println!("{}", output);

    Ok(())
}
