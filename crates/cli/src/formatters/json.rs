//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all output types as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Redaction; `ProviderFactory` serializes argument values as `[REDACTED]`.

use anyhow::Result;
use chainprofile_config::ResolvedConfig;

use crate::formatters::{Formatter, ProfileListing, ValidationEntry};

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_resolved(&self, resolved: &ResolvedConfig) -> Result<String> {
        Ok(serde_json::to_string_pretty(resolved)?)
    }

    fn format_listing(&self, listing: &ProfileListing) -> Result<String> {
        Ok(serde_json::to_string_pretty(listing)?)
    }

    fn format_validation(&self, entries: &[ValidationEntry]) -> Result<String> {
        Ok(serde_json::to_string_pretty(entries)?)
    }
}
