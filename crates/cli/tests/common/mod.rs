//! Shared test utilities for chainprofile integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write definitions files into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Host `CHAINPROFILE_*` variables and placeholder variables never leak in.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Placeholder variables referenced by `STANDARD_DEFINITIONS`.
pub const PLACEHOLDER_VARS: &[&str] = &["MNEMONIC", "INFURA_PROJECT_ID"];

/// A local `development` profile and a placeholder-driven `sepolia` profile.
pub const STANDARD_DEFINITIONS: &str = r#"{
    "networks": {
        "development": { "host": "127.0.0.1", "port": 8545, "network_id": "*" },
        "sepolia": {
            "provider": {
                "constructor": "hdwallet",
                "arguments": {
                    "mnemonic": "${MNEMONIC}",
                    "url": "https://sepolia.infura.io/v3/${INFURA_PROJECT_ID}"
                }
            },
            "network_id": 11155111,
            "gas": 8000000,
            "confirmations": 2,
            "timeoutBlocks": 200,
            "skipDryRun": true
        }
    },
    "mocha": { "timeout": 100000 },
    "compilers": { "solc": { "version": "0.8.22" } }
}"#;

/// Returns a hermetic `chainprofile` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `CHAINPROFILE_*` and placeholder variables from the host are cleared.
pub fn chainprofile_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("chainprofile");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for (key, _) in std::env::vars() {
        if key.starts_with("CHAINPROFILE_") {
            cmd.env_remove(&key);
        }
    }
    for var in PLACEHOLDER_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic command pointed at `path` via `--config`.
pub fn chainprofile_cmd_with_config(path: &Path) -> Command {
    let mut cmd = chainprofile_cmd();
    cmd.arg("--config").arg(path);
    cmd
}

/// Writes `content` to `dir/name` and returns the path.
pub fn write_definitions(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("Failed to write definitions file");
    path
}
