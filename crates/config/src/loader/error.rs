//! Error types for profile loading and resolution.
//!
//! Responsibilities:
//! - Define error variants for all loading, resolution and validation failures.
//! - Provide conversion from lower-level errors (e.g., `DefinitionsFileError`).
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the CLI crate).
//!
//! Invariants:
//! - Validation errors name the profile and the offending field.
//! - Errors never include environment variable values, only their names.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::definitions::DefinitionsFileError;
use crate::types::ProfileField;

/// Errors that can occur while loading definitions or resolving a profile.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Profile '{profile}' requires environment variable {var}, which is not set")]
    MissingEnvironmentVariable { profile: String, var: String },

    #[error("Profile '{0}' is not defined")]
    UnknownProfile(String),

    #[error("Invalid profile '{profile}': {field} {reason}")]
    InvalidProfile {
        profile: String,
        field: ProfileField,
        reason: String,
    },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("No compiler is pinned in the definitions file")]
    MissingCompiler,

    #[error("Several compilers are pinned ({}); select one explicitly", .0.join(", "))]
    AmbiguousCompiler(Vec<String>),

    #[error("Compiler '{0}' is not pinned in the definitions file")]
    UnknownCompiler(String),

    #[error("Invalid version '{version}' for compiler '{tool}': expected an exact semantic version")]
    InvalidCompilerVersion { tool: String, version: String },

    #[error("Failed to read definitions file at {path}")]
    ConfigFileRead { path: PathBuf },

    #[error("Failed to parse definitions file at {path}: {message}")]
    ConfigFileParse { path: PathBuf, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    pub(crate) fn invalid_profile(
        profile: &str,
        field: ProfileField,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidProfile {
            profile: profile.to_string(),
            field,
            reason: reason.into(),
        }
    }
}

impl From<DefinitionsFileError> for ConfigError {
    fn from(error: DefinitionsFileError) -> Self {
        match error {
            DefinitionsFileError::Read { path, .. } => ConfigError::ConfigFileRead { path },
            DefinitionsFileError::Parse { path, message } => {
                ConfigError::ConfigFileParse { path, message }
            }
        }
    }
}
