//! List command implementation.

use anyhow::Result;
use chainprofile_config::LoadedProject;

use crate::formatters::{OutputFormat, ProfileListing, get_formatter};

pub fn run(project: &LoadedProject, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    let listing = ProfileListing::new(project.profiles().iter(), project.warnings());
    let output = get_formatter(format).format_listing(&listing)?;
    println!("{}", output);

    Ok(())
}
