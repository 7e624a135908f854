//! A loaded project: profiles, compiler pin and test-runner options.

use super::error::ConfigError;
use super::resolver::ProfileResolver;
use crate::types::{CompilerSpec, LoadWarning, ProfileSet, ResolvedConfig, TestRunnerOptions};

/// Read-only state built once at startup and passed to every resolution.
///
/// The compiler pin is selected at load time, but a selection error is kept
/// and returned by every resolution so that profiles can be listed without one.
#[derive(Debug, Clone)]
pub struct LoadedProject {
    pub(crate) resolver: ProfileResolver,
    pub(crate) profiles: ProfileSet,
    pub(crate) compiler: Result<CompilerSpec, ConfigError>,
    pub(crate) test_runner: TestRunnerOptions,
}

impl LoadedProject {
    pub fn profiles(&self) -> &ProfileSet {
        &self.profiles
    }

    /// The selected compiler pin, or the error that prevented selecting one.
    pub fn compiler(&self) -> Result<&CompilerSpec, ConfigError> {
        self.compiler.as_ref().map_err(Clone::clone)
    }

    pub fn test_runner(&self) -> &TestRunnerOptions {
        &self.test_runner
    }

    pub fn warnings(&self) -> &[LoadWarning] {
        self.profiles.warnings()
    }

    /// Resolve one profile against this project's compiler pin.
    ///
    /// An unknown profile name is reported before a compiler selection error.
    pub fn resolve(&self, name: &str) -> Result<ResolvedConfig, ConfigError> {
        if !self.profiles.contains(name) {
            return Err(ConfigError::UnknownProfile(name.to_string()));
        }
        self.resolver
            .resolve(&self.profiles, self.compiler()?, name)
    }

    /// Resolve every profile, in name order.
    pub fn resolve_all(&self) -> Vec<(String, Result<ResolvedConfig, ConfigError>)> {
        match &self.compiler {
            Ok(compiler) => self.resolver.resolve_all(&self.profiles, compiler),
            Err(e) => self
                .profiles
                .names()
                .map(|name| (name.to_string(), Err(e.clone())))
                .collect(),
        }
    }
}
