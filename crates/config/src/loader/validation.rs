//! Profile invariant checks applied at resolution time.
//!
//! Checks, in order:
//! - Deferred load issues (missing placeholder variables, unparsable values),
//!   in the order they were recorded: definition values first, then overrides.
//! - Endpoint shape: a remote profile has a provider factory and no host/port;
//!   a local profile has both host and port; a profile with neither is an
//!   incomplete remote profile.
//! - `networkId` is present.
//! - Ranges: port in `1..=65535`, `confirmations >= 0`, `gasLimit > 0`,
//!   `timeoutBlocks > 0`.
//!
//! The first violation is reported, naming the profile and the field.

use super::error::ConfigError;
use crate::constants::{MAX_PORT, MIN_PORT};
use crate::types::{Endpoint, LoadIssue, NetworkId, Profile, ProfileField};

/// Profile values that passed every check.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ValidatedProfile {
    pub endpoint: Endpoint,
    pub network_id: NetworkId,
    pub gas_limit: Option<u64>,
    pub confirmations: Option<u64>,
    pub timeout_blocks: Option<u64>,
    pub skip_dry_run: bool,
}

pub(crate) fn validate_profile(profile: &Profile) -> Result<ValidatedProfile, ConfigError> {
    if let Some(issue) = profile.issues.first() {
        return Err(issue_error(&profile.name, issue));
    }

    let endpoint = validate_endpoint(profile)?;
    let network_id = profile.network_id.clone().ok_or_else(|| {
        ConfigError::invalid_profile(&profile.name, ProfileField::NetworkId, "is required")
    })?;

    Ok(ValidatedProfile {
        endpoint,
        network_id,
        gas_limit: positive(&profile.name, ProfileField::GasLimit, profile.gas_limit)?,
        confirmations: non_negative(
            &profile.name,
            ProfileField::Confirmations,
            profile.confirmations,
        )?,
        timeout_blocks: positive(
            &profile.name,
            ProfileField::TimeoutBlocks,
            profile.timeout_blocks,
        )?,
        skip_dry_run: profile.skip_dry_run.unwrap_or(false),
    })
}

fn issue_error(profile: &str, issue: &LoadIssue) -> ConfigError {
    match issue {
        LoadIssue::MissingVariable { var, .. } => ConfigError::MissingEnvironmentVariable {
            profile: profile.to_string(),
            var: var.clone(),
        },
        LoadIssue::InvalidValue {
            origin, message, ..
        } => ConfigError::InvalidValue {
            var: origin.clone(),
            message: message.clone(),
        },
    }
}

fn validate_endpoint(profile: &Profile) -> Result<Endpoint, ConfigError> {
    let name = &profile.name;

    if let Some(provider) = &profile.provider_factory {
        if profile.host.is_some() {
            return Err(ConfigError::invalid_profile(
                name,
                ProfileField::Host,
                "must not be set when providerFactory is present",
            ));
        }
        if profile.port.is_some() {
            return Err(ConfigError::invalid_profile(
                name,
                ProfileField::Port,
                "must not be set when providerFactory is present",
            ));
        }
        if provider.constructor().is_empty() {
            return Err(ConfigError::invalid_profile(
                name,
                ProfileField::ProviderFactory,
                "constructor must not be empty",
            ));
        }
        return Ok(Endpoint::Remote {
            provider_factory: provider.clone(),
        });
    }

    if profile.is_remote() {
        return Err(ConfigError::invalid_profile(
            name,
            ProfileField::ProviderFactory,
            "is required for a remote profile (a local profile needs host and port)",
        ));
    }

    let host = match profile.host.as_deref().map(str::trim) {
        Some(host) if !host.is_empty() => host.to_string(),
        Some(_) => {
            return Err(ConfigError::invalid_profile(
                name,
                ProfileField::Host,
                "must not be empty",
            ));
        }
        None => {
            return Err(ConfigError::invalid_profile(
                name,
                ProfileField::Host,
                "is required for a local profile",
            ));
        }
    };

    let port = profile.port.ok_or_else(|| {
        ConfigError::invalid_profile(name, ProfileField::Port, "is required for a local profile")
    })?;
    let port = u16::try_from(port)
        .ok()
        .filter(|p| (MIN_PORT..=MAX_PORT).contains(&i64::from(*p)))
        .ok_or_else(|| {
            ConfigError::invalid_profile(
                name,
                ProfileField::Port,
                format!("must be between {MIN_PORT} and {MAX_PORT} (got {port})"),
            )
        })?;

    Ok(Endpoint::Local { host, port })
}

fn positive(
    profile: &str,
    field: ProfileField,
    value: Option<i64>,
) -> Result<Option<u64>, ConfigError> {
    match value {
        Some(v) if v <= 0 => Err(ConfigError::invalid_profile(
            profile,
            field,
            format!("must be greater than 0 (got {v})"),
        )),
        other => Ok(other.map(|v| v.unsigned_abs())),
    }
}

fn non_negative(
    profile: &str,
    field: ProfileField,
    value: Option<i64>,
) -> Result<Option<u64>, ConfigError> {
    match value {
        Some(v) if v < 0 => Err(ConfigError::invalid_profile(
            profile,
            field,
            format!("must not be negative (got {v})"),
        )),
        other => Ok(other.map(|v| v.unsigned_abs())),
    }
}
