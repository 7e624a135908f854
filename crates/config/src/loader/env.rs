//! Environment snapshot and per-profile environment overrides.
//!
//! Responsibilities:
//! - Provide `Environment`, an explicit snapshot of variable name → value that
//!   `ProfileResolver::load` reads instead of the process environment.
//! - Apply `<PREFIX>_<PROFILE>_<FIELD>` overrides to a loaded profile.
//! - Provide helpers for reading process variables with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Placeholder substitution in definition values (see profile.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Environment overrides take precedence over definition values.
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Unparsable override values become deferred `LoadIssue`s, never load errors.
//! - `Debug` output lists variable names only.

use std::collections::BTreeMap;
use std::fmt;

use super::value::{parse_bool, parse_integer, parse_network_id};
use crate::types::{Profile, ProfileField};

/// Read a process environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// A materialized set of environment variables.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Add a variable (builder style).
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Look up a variable; empty or whitespace-only values count as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("vars", &self.vars.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Name of the override variable for one profile field.
///
/// The profile name is upper-cased and every non-alphanumeric character is
/// mapped to `_` (`my-testnet` → `CHAINPROFILE_MY_TESTNET_PORT`).
pub fn override_var(prefix: &str, profile: &str, suffix: &str) -> String {
    format!("{}_{suffix}", override_stem(prefix, profile))
}

/// The part of an override variable name shared by all fields of a profile.
///
/// Distinct profile names can share a stem (`my-net` and `my_net`).
pub(crate) fn override_stem(prefix: &str, profile: &str) -> String {
    let profile: String = profile
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{prefix}_{profile}")
}

const OVERRIDABLE: [ProfileField; 7] = [
    ProfileField::Host,
    ProfileField::Port,
    ProfileField::NetworkId,
    ProfileField::GasLimit,
    ProfileField::Confirmations,
    ProfileField::TimeoutBlocks,
    ProfileField::SkipDryRun,
];

/// Apply environment overrides to a loaded profile.
///
/// Override values are taken literally (no placeholder substitution).
pub(crate) fn apply_overrides(profile: &mut Profile, prefix: &str, env: &Environment) {
    for field in OVERRIDABLE {
        let Some(suffix) = field.env_suffix() else {
            continue;
        };
        let var = override_var(prefix, &profile.name, suffix);
        let Some(value) = env.get(&var) else {
            continue;
        };

        profile.clear_issues(field);
        let applied = match field {
            ProfileField::Host => {
                profile.host = Some(value.to_string());
                Ok(())
            }
            ProfileField::Port => parse_integer(field, &var, value).map(|v| profile.port = Some(v)),
            ProfileField::NetworkId => {
                parse_network_id(field, &var, value).map(|v| profile.network_id = Some(v))
            }
            ProfileField::GasLimit => {
                parse_integer(field, &var, value).map(|v| profile.gas_limit = Some(v))
            }
            ProfileField::Confirmations => {
                parse_integer(field, &var, value).map(|v| profile.confirmations = Some(v))
            }
            ProfileField::TimeoutBlocks => {
                parse_integer(field, &var, value).map(|v| profile.timeout_blocks = Some(v))
            }
            ProfileField::SkipDryRun => {
                parse_bool(field, &var, value).map(|v| profile.skip_dry_run = Some(v))
            }
            ProfileField::Name | ProfileField::ProviderFactory => Ok(()),
        };

        if let Err(issue) = applied {
            profile.issues.push(issue);
        }
    }
}
