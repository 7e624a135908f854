//! Centralized constants for the chainprofile workspace.
//!
//! This module contains default values and environment variable names used
//! across crates to avoid duplicating string literals.

// =============================================================================
// Environment Variables
// =============================================================================

/// Default prefix for per-profile environment overrides
/// (`CHAINPROFILE_<PROFILE>_<FIELD>`).
pub const DEFAULT_ENV_PREFIX: &str = "CHAINPROFILE";

/// Path to the definitions file.
pub const ENV_CONFIG_PATH: &str = "CHAINPROFILE_CONFIG_PATH";

/// Name of the profile to resolve when none is given explicitly.
pub const ENV_NETWORK: &str = "CHAINPROFILE_NETWORK";

/// Compiler tool to select when the definitions pin several.
pub const ENV_COMPILER: &str = "CHAINPROFILE_COMPILER";

/// Suffix of the compiler version override (`<PREFIX>_COMPILER_VERSION`).
pub const COMPILER_VERSION_SUFFIX: &str = "COMPILER_VERSION";

/// Gate that disables `.env` loading (accepts `1` or `true`).
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Defaults
// =============================================================================

/// Definitions file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "chainprofile.json";

/// Profile resolved when the caller names none.
pub const DEFAULT_PROFILE_NAME: &str = "development";

// =============================================================================
// Validation Bounds
// =============================================================================

/// Lowest valid TCP port.
pub const MIN_PORT: i64 = 1;

/// Highest valid TCP port.
pub const MAX_PORT: i64 = 65_535;
