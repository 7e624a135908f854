//! Validate command implementation.
//!
//! Resolves every profile so that dormant profiles are checked too. The exit
//! code follows the first failing profile in name order.

use anyhow::Result;
use chainprofile_config::LoadedProject;
use tracing::{debug, warn};

use crate::formatters::{OutputFormat, ValidationEntry, get_formatter};

pub fn run(project: &LoadedProject, output_format: &str) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;

    let results = project.resolve_all();
    let total = results.len();
    let mut entries = Vec::with_capacity(total);
    let mut first_failure = None;

    for (name, result) in results {
        match result {
            Ok(_) => {
                debug!("Profile '{}' is valid", name);
                entries.push(ValidationEntry {
                    profile: name,
                    valid: true,
                    error: None,
                });
            }
            Err(e) => {
                warn!("Profile '{}' failed validation: {}", name, e);
                entries.push(ValidationEntry {
                    profile: name,
                    valid: false,
                    error: Some(e.to_string()),
                });
                first_failure.get_or_insert(e);
            }
        }
    }

    let output = get_formatter(format).format_validation(&entries)?;
    println!("{}", output);

    match first_failure {
        None => Ok(()),
        Some(e) => {
            let failed = entries.iter().filter(|entry| !entry.valid).count();
            Err(anyhow::Error::new(e)
                .context(format!("{} of {} profiles failed validation", failed, total)))
        }
    }
}
