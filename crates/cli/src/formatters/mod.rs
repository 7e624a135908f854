//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the text and JSON output formats.
//! - Define the summary structures printed by `list` and `validate`.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Resolving profiles (see `commands`).
//!
//! Invariants:
//! - Provider argument values never appear in any format; only their names do.
//! - Missing values print as `(not set)` in text and `null` in JSON.

mod json;
mod text;

use anyhow::Result;
use chainprofile_config::{LoadWarning, Profile, ResolvedConfig};
use serde::Serialize;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Placeholder printed by the text formatter for absent values.
pub const NOT_SET: &str = "(not set)";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "table" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: text, json", s),
        }
    }
}

/// One row of `list` output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub name: String,
    pub kind: &'static str,
    pub network_id: Option<String>,
    /// Number of load problems that will surface when the profile is resolved.
    pub pending_issues: usize,
}

impl From<&Profile> for ProfileSummary {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            kind: if profile.is_remote() { "remote" } else { "local" },
            network_id: profile.network_id.as_ref().map(ToString::to_string),
            pending_issues: profile.issues.len(),
        }
    }
}

/// `list` output: profiles in name order plus load warnings.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileListing {
    pub profiles: Vec<ProfileSummary>,
    pub warnings: Vec<String>,
}

impl ProfileListing {
    pub fn new<'a>(
        profiles: impl Iterator<Item = &'a Profile>,
        warnings: &[LoadWarning],
    ) -> Self {
        Self {
            profiles: profiles.map(ProfileSummary::from).collect(),
            warnings: warnings.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Outcome of resolving one profile during `validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationEntry {
    pub profile: String,
    pub valid: bool,
    pub error: Option<String>,
}

/// Formatter trait for the CLI's output types.
pub trait Formatter {
    /// Format one resolved profile.
    fn format_resolved(&self, resolved: &ResolvedConfig) -> Result<String>;

    /// Format the profile listing.
    fn format_listing(&self, listing: &ProfileListing) -> Result<String>;

    /// Format validation outcomes.
    fn format_validation(&self, entries: &[ValidationEntry]) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
mod tests;
