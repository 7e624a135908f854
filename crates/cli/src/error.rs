//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use chainprofile_config::ConfigError;

/// Structured exit codes for chainprofile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unreadable definitions, bad compiler pin, bad arguments.
    GeneralError = 1,

    /// A placeholder of the requested profile has no environment value.
    ///
    /// Scripts should export the named variable and retry.
    MissingEnvironment = 2,

    /// The requested profile is not defined.
    UnknownProfile = 4,

    /// The requested profile or one of its values is invalid.
    ///
    /// Scripts should fix the definitions or overrides, not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingEnvironmentVariable { .. } => ExitCode::MissingEnvironment,
            ConfigError::UnknownProfile(_) => ExitCode::UnknownProfile,
            ConfigError::InvalidProfile { .. } | ConfigError::InvalidValue { .. } => {
                ExitCode::ValidationError
            }
            ConfigError::MissingCompiler
            | ConfigError::AmbiguousCompiler(_)
            | ConfigError::UnknownCompiler(_)
            | ConfigError::InvalidCompilerVersion { .. }
            | ConfigError::ConfigFileRead { .. }
            | ConfigError::ConfigFileParse { .. }
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no `ConfigError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map_or(ExitCode::GeneralError, ExitCode::from)
    }
}
