//! Profile types for chainprofile.
//!
//! Responsibilities:
//! - Define `RawProfile`, the profile as authored in a definitions file.
//! - Define `Profile`, the profile after placeholder substitution and
//!   environment overrides, before validation.
//! - Define `ProfileField`, the stable names used in validation errors.
//!
//! Does NOT handle:
//! - Substitution or override logic (see `loader::profile` and `loader::env`).
//! - Invariant checks (see `loader::validation`).
//!
//! Invariants:
//! - All `RawProfile` fields are optional; requiredness depends on whether the
//!   profile is local or remote and is enforced only at resolution time.
//! - Numeric fields keep the signed value as loaded so that out-of-range values
//!   are reported by name instead of failing to deserialize.
//! - `Profile::issues` records load problems that must only surface when the
//!   profile is actually requested.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::network::NetworkId;
use crate::types::provider::{ProviderFactory, RawProviderFactory};

/// A scalar as written in a definitions file.
///
/// Strings may contain `${VAR}` placeholders, including strings standing in
/// for numbers or booleans (e.g. `"port": "${GANACHE_PORT}"`).
///
/// Any other value (floats, arrays, maps) is kept as `Unsupported` so that it
/// fails only when its profile is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Bool(bool),
    Integer(i64),
    Text(String),
    Unsupported(serde_json::Value),
}

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ScalarValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for ScalarValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Profile definition as authored.
///
/// Accepts both the camelCase keys and the snake_case/short spellings used by
/// existing toolchain configs (`network_id`, `gas`, `provider`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawProfile {
    /// Hostname or IP of a local node
    pub host: Option<ScalarValue>,
    /// TCP port of a local node
    pub port: Option<ScalarValue>,
    /// Chain id, `"*"` for any
    #[serde(alias = "network_id")]
    pub network_id: Option<ScalarValue>,
    /// Gas limit used for deployments
    #[serde(alias = "gas")]
    pub gas_limit: Option<ScalarValue>,
    /// Number of confirmations to wait between deployments
    pub confirmations: Option<ScalarValue>,
    /// Number of blocks before a deployment times out
    #[serde(alias = "timeout_blocks")]
    pub timeout_blocks: Option<ScalarValue>,
    /// Skip the dry run before migrations
    #[serde(alias = "skip_dry_run")]
    pub skip_dry_run: Option<ScalarValue>,
    /// External transport constructor for remote profiles
    #[serde(alias = "provider")]
    pub provider_factory: Option<RawProviderFactory>,
}

impl RawProfile {
    /// A local profile definition (`host` + `port`).
    pub fn local(host: &str, port: i64, network_id: impl Into<ScalarValue>) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(port.into()),
            network_id: Some(network_id.into()),
            ..Self::default()
        }
    }

    /// A remote profile definition carried by a provider factory.
    pub fn remote(provider: RawProviderFactory, network_id: impl Into<ScalarValue>) -> Self {
        Self {
            network_id: Some(network_id.into()),
            provider_factory: Some(provider),
            ..Self::default()
        }
    }
}

/// Names of profile fields, as they appear in definitions files and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    Name,
    Host,
    Port,
    NetworkId,
    GasLimit,
    Confirmations,
    TimeoutBlocks,
    SkipDryRun,
    ProviderFactory,
}

impl ProfileField {
    /// The definition key for this field.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Host => "host",
            Self::Port => "port",
            Self::NetworkId => "networkId",
            Self::GasLimit => "gasLimit",
            Self::Confirmations => "confirmations",
            Self::TimeoutBlocks => "timeoutBlocks",
            Self::SkipDryRun => "skipDryRun",
            Self::ProviderFactory => "providerFactory",
        }
    }

    /// Suffix of the per-profile environment override, if the field can be overridden.
    pub const fn env_suffix(self) -> Option<&'static str> {
        match self {
            Self::Host => Some("HOST"),
            Self::Port => Some("PORT"),
            Self::NetworkId => Some("NETWORK_ID"),
            Self::GasLimit => Some("GAS_LIMIT"),
            Self::Confirmations => Some("CONFIRMATIONS"),
            Self::TimeoutBlocks => Some("TIMEOUT_BLOCKS"),
            Self::SkipDryRun => Some("SKIP_DRY_RUN"),
            Self::Name | Self::ProviderFactory => None,
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A load problem deferred until the profile is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadIssue {
    /// A `${VAR}` placeholder had no environment value.
    MissingVariable { field: ProfileField, var: String },
    /// A value could not be converted to the field's type.
    ///
    /// `origin` is the definition key or the override variable that supplied it.
    InvalidValue {
        field: ProfileField,
        origin: String,
        message: String,
    },
}

impl LoadIssue {
    /// The field this issue belongs to.
    pub fn field(&self) -> ProfileField {
        match self {
            Self::MissingVariable { field, .. } | Self::InvalidValue { field, .. } => *field,
        }
    }
}

/// A named profile after placeholder substitution and environment overrides.
///
/// Values are not range-checked here; see `ProfileResolver::resolve`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub name: String,
    pub host: Option<String>,
    pub port: Option<i64>,
    pub network_id: Option<NetworkId>,
    pub gas_limit: Option<i64>,
    pub confirmations: Option<i64>,
    pub timeout_blocks: Option<i64>,
    pub skip_dry_run: Option<bool>,
    pub provider_factory: Option<ProviderFactory>,
    pub issues: Vec<LoadIssue>,
}

impl Profile {
    /// A profile is remote when it is carried by a provider factory, including
    /// one whose arguments could not be filled in yet.
    ///
    /// A profile with neither a provider factory nor a host or port (set or
    /// pending) counts as an incomplete remote profile.
    pub fn is_remote(&self) -> bool {
        if self.provider_factory.is_some() || self.has_issue(ProfileField::ProviderFactory) {
            return true;
        }
        let has_local_endpoint = self.host.is_some()
            || self.port.is_some()
            || self.has_issue(ProfileField::Host)
            || self.has_issue(ProfileField::Port);
        !has_local_endpoint
    }

    fn has_issue(&self, field: ProfileField) -> bool {
        self.issues.iter().any(|issue| issue.field() == field)
    }

    /// Drop deferred issues for a field whose value has been replaced.
    pub(crate) fn clear_issues(&mut self, field: ProfileField) {
        self.issues.retain(|issue| issue.field() != field);
    }
}
