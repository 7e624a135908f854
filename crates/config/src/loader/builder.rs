//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that wires dotenv, the
//!   definitions file, the environment snapshot and `ProfileResolver` together.
//! - Build a `LoadedProject` once, or a `ResolvedConfig` for the selected profile.
//!
//! Does NOT handle:
//! - Placeholder substitution or overrides (delegated to `ProfileResolver`).
//! - Parsing the definitions file (delegated to `ProjectDefinitions`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - Without `with_environment`, the process environment is snapshotted once per load.

use std::path::{Path, PathBuf};

use super::env::{Environment, env_var_or_none};
use super::error::ConfigError;
use super::project::LoadedProject;
use super::resolver::ProfileResolver;
use crate::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_PROFILE_NAME, ENV_COMPILER, ENV_CONFIG_PATH,
    ENV_DOTENV_DISABLED, ENV_NETWORK,
};
use crate::definitions::ProjectDefinitions;
use crate::types::ResolvedConfig;

/// Configuration loader that resolves a profile from a definitions file and the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    profile_name: Option<String>,
    compiler: Option<String>,
    environment: Option<Environment>,
    resolver: ProfileResolver,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the definitions file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Set the profile to resolve in `build()`.
    pub fn with_profile_name(mut self, name: String) -> Self {
        self.profile_name = Some(name);
        self
    }

    /// Select the compiler entry when the definitions pin several.
    pub fn with_compiler(mut self, tool: String) -> Self {
        self.compiler = Some(tool);
        self
    }

    /// Use an explicit environment instead of the process environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Use a different prefix for per-profile environment overrides.
    pub fn with_env_prefix(mut self, prefix: String) -> Self {
        self.resolver = self.resolver.with_env_prefix(prefix);
        self
    }

    /// Fill unset selections from environment variables.
    ///
    /// Reads `CHAINPROFILE_CONFIG_PATH`, `CHAINPROFILE_NETWORK` and
    /// `CHAINPROFILE_COMPILER` from the explicit environment if one was given,
    /// otherwise from the process. Values set through builder methods win.
    pub fn from_env(mut self) -> Self {
        let lookup = |key: &str| match &self.environment {
            Some(env) => env.get(key).map(str::to_string),
            None => env_var_or_none(key),
        };

        let config_path = lookup(ENV_CONFIG_PATH);
        let profile_name = lookup(ENV_NETWORK);
        let compiler = lookup(ENV_COMPILER);

        if self.config_path.is_none() {
            self.config_path = config_path.map(PathBuf::from);
        }
        if self.profile_name.is_none() {
            self.profile_name = profile_name;
        }
        if self.compiler.is_none() {
            self.compiler = compiler;
        }
        self
    }

    /// The definitions file that `load()` reads.
    pub fn effective_config_path(&self) -> &Path {
        self.config_path
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Read the definitions file and load every profile.
    ///
    /// Profiles are not validated here; see `LoadedProject::resolve`.
    pub fn load(&self) -> Result<LoadedProject, ConfigError> {
        let definitions = ProjectDefinitions::read(self.effective_config_path())?;
        self.load_definitions(definitions)
    }

    /// Load already-parsed definitions.
    ///
    /// A missing or unusable compiler pin does not fail the load; it is
    /// reported when a profile is resolved.
    pub fn load_definitions(
        &self,
        definitions: ProjectDefinitions,
    ) -> Result<LoadedProject, ConfigError> {
        let environment = self
            .environment
            .clone()
            .unwrap_or_else(Environment::from_process);

        let profiles = self.resolver.load(&definitions.networks, &environment);
        let compiler = self.resolver.compiler_spec(
            &definitions.compilers,
            self.compiler.as_deref(),
            &environment,
        );

        Ok(LoadedProject {
            resolver: self.resolver.clone(),
            profiles,
            compiler,
            test_runner: definitions.mocha,
        })
    }

    /// Load the project and resolve the selected profile (`development` by default).
    pub fn build(self) -> Result<ResolvedConfig, ConfigError> {
        let project = self.load()?;
        let name = self.profile_name.as_deref().unwrap_or(DEFAULT_PROFILE_NAME);
        project.resolve(name)
    }
}
