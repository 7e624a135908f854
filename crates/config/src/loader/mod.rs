//! Profile loading and resolution.
//!
//! Responsibilities:
//! - Turn authored network definitions into a `ProfileSet`, substituting
//!   `${VAR}` placeholders and applying per-profile environment overrides.
//! - Validate one requested profile and return an immutable `ResolvedConfig`.
//! - Provide a builder-pattern `ConfigLoader` that wires `.env` loading, the
//!   definitions file and the environment snapshot together.
//!
//! Does NOT handle:
//! - Constructing provider transports, compiling, or deploying.
//! - Logging; callers report `LoadWarning`s and errors themselves.
//!
//! Invariants / Assumptions:
//! - Environment overrides take precedence over definition values.
//! - Validation is lazy: only the requested profile is checked.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod placeholder;
mod profile;
mod project;
mod resolver;
mod validation;
mod value;

pub use builder::ConfigLoader;
pub use env::{Environment, env_var_or_none, override_var};
pub use error::ConfigError;
pub use project::LoadedProject;
pub use resolver::ProfileResolver;

#[cfg(test)]
mod tests;
