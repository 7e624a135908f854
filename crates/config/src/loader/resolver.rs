//! Profile resolution: load → override → validate → return.
//!
//! Responsibilities:
//! - `load`: turn authored network definitions plus an environment snapshot
//!   into a `ProfileSet`.
//! - `compiler_spec`: pick and validate the process-wide compiler pin.
//! - `resolve`: validate one requested profile and combine it with the
//!   compiler pin into a fresh `ResolvedConfig`.
//!
//! Does NOT handle:
//! - Reading files or the process environment (callers pass both in).
//! - Logging. Warnings are returned on the `ProfileSet` for the caller to report.
//! - Constructing provider transports for remote profiles.
//!
//! Invariants:
//! - `load` never fails; problems in a profile surface only when that profile
//!   is resolved.
//! - `load` and `resolve` are pure functions of their inputs (apart from the
//!   resolution timestamp) and never mutate the `ProfileSet`.

use chrono::Utc;
use semver::Version;
use std::collections::BTreeMap;

use super::env::{Environment, apply_overrides, override_stem};
use super::error::ConfigError;
use super::profile::build_profile;
use super::validation::validate_profile;
use crate::constants::{COMPILER_VERSION_SUFFIX, DEFAULT_ENV_PREFIX};
use crate::definitions::RawNetworks;
use crate::types::{CompilerSpec, LoadWarning, ProfileSet, RawCompiler, ResolvedConfig};

/// Loads, overrides and validates named deployment profiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileResolver {
    env_prefix: String,
}

impl Default for ProfileResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileResolver {
    /// Create a resolver using the default override prefix (`CHAINPROFILE`).
    pub fn new() -> Self {
        Self {
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Use a different prefix for environment overrides.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    /// Build a `ProfileSet` from authored definitions and an environment snapshot.
    ///
    /// Placeholders are substituted and overrides applied to every profile, but
    /// nothing is validated here: a profile that is never resolved may reference
    /// variables that are not set.
    ///
    /// Profiles whose names map to the same override variables are flagged
    /// with `LoadWarning::SharedOverrideName`.
    pub fn load(&self, raw: &RawNetworks, env: &Environment) -> ProfileSet {
        let mut set = ProfileSet::default();
        for (name, definition) in raw.iter() {
            let mut profile = build_profile(name, definition, env);
            apply_overrides(&mut profile, &self.env_prefix, env);
            set.insert(profile);
        }

        let mut stems: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for name in set.names() {
            stems
                .entry(override_stem(&self.env_prefix, name))
                .or_default()
                .push(name.to_string());
        }
        for (stem, profiles) in stems {
            if profiles.len() > 1 {
                set.warn(LoadWarning::SharedOverrideName { stem, profiles });
            }
        }
        set
    }

    /// Select the compiler pin from the definitions' `compilers` section.
    ///
    /// `tool` picks an entry by name; without it the section must contain
    /// exactly one entry. `<PREFIX>_COMPILER_VERSION` replaces the pinned version.
    pub fn compiler_spec(
        &self,
        compilers: &BTreeMap<String, RawCompiler>,
        tool: Option<&str>,
        env: &Environment,
    ) -> Result<CompilerSpec, ConfigError> {
        let (tool_name, raw) = match tool {
            Some(tool) => compilers
                .get_key_value(tool)
                .ok_or_else(|| ConfigError::UnknownCompiler(tool.to_string()))?,
            None => {
                let mut entries = compilers.iter();
                match (entries.next(), entries.next()) {
                    (None, _) => return Err(ConfigError::MissingCompiler),
                    (Some(entry), None) => entry,
                    (Some(_), Some(_)) => {
                        return Err(ConfigError::AmbiguousCompiler(
                            compilers.keys().cloned().collect(),
                        ));
                    }
                }
            }
        };

        let override_var = format!("{}_{}", self.env_prefix, COMPILER_VERSION_SUFFIX);
        let version = env
            .get(&override_var)
            .or(raw.version.as_deref())
            .map(str::trim)
            .unwrap_or_default();

        let parsed = Version::parse(version).map_err(|_| ConfigError::InvalidCompilerVersion {
            tool: tool_name.clone(),
            version: version.to_string(),
        })?;

        Ok(CompilerSpec::new(tool_name.clone(), parsed))
    }

    /// Resolve one profile into an immutable snapshot.
    ///
    /// # Errors
    ///
    /// - `UnknownProfile` if `name` is not in `profiles`.
    /// - `MissingEnvironmentVariable` if a placeholder of this profile had no value.
    /// - `InvalidValue` if a value or override could not be parsed.
    /// - `InvalidProfile` naming the field of the first violated invariant.
    pub fn resolve(
        &self,
        profiles: &ProfileSet,
        compiler: &CompilerSpec,
        name: &str,
    ) -> Result<ResolvedConfig, ConfigError> {
        let profile = profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))?;

        let validated = validate_profile(profile)?;

        Ok(ResolvedConfig {
            profile: profile.name.clone(),
            endpoint: validated.endpoint,
            network_id: validated.network_id,
            gas_limit: validated.gas_limit,
            confirmations: validated.confirmations,
            timeout_blocks: validated.timeout_blocks,
            skip_dry_run: validated.skip_dry_run,
            compiler: compiler.clone(),
            resolved_at: Utc::now(),
        })
    }

    /// Resolve every profile, in name order.
    pub fn resolve_all(
        &self,
        profiles: &ProfileSet,
        compiler: &CompilerSpec,
    ) -> Vec<(String, Result<ResolvedConfig, ConfigError>)> {
        profiles
            .names()
            .map(|name| (name.to_string(), self.resolve(profiles, compiler, name)))
            .collect()
    }
}
