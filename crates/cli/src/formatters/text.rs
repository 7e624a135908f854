//! Text formatter implementation.
//!
//! Responsibilities:
//! - Format resolved profiles as aligned `Label: value` lines.
//! - Format listings and validation outcomes as tab-separated tables.
//!
//! Does NOT handle:
//! - Machine-readable output (see `json`).

use anyhow::Result;
use chainprofile_config::{Endpoint, ResolvedConfig};

use crate::formatters::{Formatter, NOT_SET, ProfileListing, ValidationEntry};

/// Human-readable text formatter.
pub struct TextFormatter;

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_SET.to_string(), |v| v.to_string())
}

fn line(output: &mut String, label: &str, value: impl AsRef<str>) {
    output.push_str(&format!("{:<20} {}\n", label, value.as_ref()));
}

impl Formatter for TextFormatter {
    fn format_resolved(&self, resolved: &ResolvedConfig) -> Result<String> {
        let mut output = String::new();

        line(&mut output, "Profile:", resolved.profile_name());
        match resolved.endpoint() {
            Endpoint::Local { host, port } => {
                line(&mut output, "Kind:", "local");
                line(&mut output, "Host:", host);
                line(&mut output, "Port:", port.to_string());
            }
            Endpoint::Remote { provider_factory } => {
                line(&mut output, "Kind:", "remote");
                line(&mut output, "Provider:", provider_factory.constructor());
                for name in provider_factory.argument_names() {
                    line(&mut output, &format!("  {}:", name), "****");
                }
            }
        }
        line(&mut output, "Network ID:", resolved.network_id().to_string());
        line(&mut output, "Gas Limit:", optional(resolved.gas_limit()));
        line(&mut output, "Confirmations:", optional(resolved.confirmations()));
        line(&mut output, "Timeout Blocks:", optional(resolved.timeout_blocks()));
        line(&mut output, "Skip Dry Run:", resolved.skip_dry_run().to_string());
        line(
            &mut output,
            "Compiler:",
            format!(
                "{} {}",
                resolved.compiler().tool_name(),
                resolved.compiler().version()
            ),
        );

        Ok(output.trim_end().to_string())
    }

    fn format_listing(&self, listing: &ProfileListing) -> Result<String> {
        if listing.profiles.is_empty() {
            return Ok("No profiles defined.".to_string());
        }

        let mut output = String::from("Name\tKind\tNetwork ID\tPending Issues\n");
        for profile in &listing.profiles {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                profile.name,
                profile.kind,
                profile.network_id.as_deref().unwrap_or(NOT_SET),
                profile.pending_issues
            ));
        }
        for warning in &listing.warnings {
            output.push_str(&format!("warning: {}\n", warning));
        }

        Ok(output.trim_end().to_string())
    }

    fn format_validation(&self, entries: &[ValidationEntry]) -> Result<String> {
        if entries.is_empty() {
            return Ok("No profiles defined.".to_string());
        }

        let mut output = String::new();
        for entry in entries {
            match &entry.error {
                None => output.push_str(&format!("ok\t{}\n", entry.profile)),
                Some(error) => output.push_str(&format!("FAIL\t{}\t{}\n", entry.profile, error)),
            }
        }

        Ok(output.trim_end().to_string())
    }
}
