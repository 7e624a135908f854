//! Configuration type definitions for chainprofile.
//!
//! Responsibilities:
//! - Define raw (as authored) and loaded profile types.
//! - Define the immutable `ResolvedConfig` snapshot handed to deployment runners.
//! - Define process-wide settings: `CompilerSpec` and `TestRunnerOptions`.
//!
//! Does NOT handle:
//! - Placeholder substitution or environment overrides (see `loader` module).
//! - Invariant validation (see `loader::validation`).
//! - Reading definition files from disk (see `definitions` module).
//!
//! Invariants:
//! - Provider factory arguments are held as `secrecy::SecretString` and never
//!   appear in `Debug` or serialized output.
//! - `ResolvedConfig` exposes accessors only; it cannot be mutated after resolution.

mod compiler;
mod network;
mod profile;
mod profile_set;
mod provider;
mod resolved;
mod test_runner;

pub use compiler::{CompilerSpec, RawCompiler};
pub use network::NetworkId;
pub use profile::{LoadIssue, Profile, ProfileField, RawProfile, ScalarValue};
pub use profile_set::{LoadWarning, ProfileSet};
pub use provider::{ProviderFactory, RawProviderFactory};
pub use resolved::{Endpoint, ResolvedConfig};
pub use test_runner::TestRunnerOptions;
