//! Tests for profile loading and resolution.
//!
//! Responsibilities:
//! - Test `ProfileResolver::load` / `resolve` end to end on in-memory definitions.
//! - Test environment override precedence and lazy validation.
//! - Test the `ConfigLoader` builder against definitions files on disk.
//! - Test dotenv loading.
//!
//! Invariants:
//! - Tests that touch the process environment or cwd use `serial_test` and
//!   `env_lock()`; all other tests pass an explicit `Environment`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

use secrecy::SecretString;
use semver::Version;

use crate::definitions::RawNetworks;
use crate::types::{CompilerSpec, RawProfile, RawProviderFactory, ScalarValue};

pub mod resolver_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// The compiler pin used by most tests.
pub fn solc() -> CompilerSpec {
    CompilerSpec::new("solc", Version::new(0, 8, 22))
}

/// A dormant remote profile in the style of a commented-out testnet entry.
pub fn sepolia_definition() -> RawProfile {
    RawProfile {
        gas_limit: Some(ScalarValue::Integer(8_000_000)),
        confirmations: Some(ScalarValue::Integer(2)),
        timeout_blocks: Some(ScalarValue::Integer(200)),
        skip_dry_run: Some(ScalarValue::Bool(true)),
        ..RawProfile::remote(
            RawProviderFactory::new("hdwallet")
                .with_argument("mnemonic", "${MNEMONIC}")
                .with_argument("url", "https://sepolia.infura.io/v3/${INFURA_PROJECT_ID}"),
            ScalarValue::Integer(11_155_111),
        )
    }
}

/// `development` (local) plus `sepolia` (remote, placeholder-driven).
pub fn standard_networks() -> RawNetworks {
    RawNetworks::new()
        .with_profile("development", RawProfile::local("127.0.0.1", 8545, "*"))
        .with_profile("sepolia", sepolia_definition())
}

pub fn secret(value: &str) -> SecretString {
    SecretString::new(value.to_string().into())
}
