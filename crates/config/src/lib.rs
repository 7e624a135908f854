//! Network profile configuration for smart-contract toolchains.
//!
//! This crate loads named deployment profiles, applies environment
//! overrides, validates the requested profile and returns an immutable
//! resolved configuration for deployment runners to consume.

pub mod constants;
pub mod definitions;
mod loader;
pub mod types;

pub use definitions::{DefinitionsFileError, ProjectDefinitions, RawNetworks};
pub use loader::{
    ConfigError, ConfigLoader, Environment, LoadedProject, ProfileResolver, env_var_or_none,
    override_var,
};
pub use types::{
    CompilerSpec, Endpoint, LoadIssue, LoadWarning, NetworkId, Profile, ProfileField, ProfileSet,
    ProviderFactory, RawCompiler, RawProfile, RawProviderFactory, ResolvedConfig, ScalarValue,
    TestRunnerOptions,
};
