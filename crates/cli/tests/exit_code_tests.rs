//! Integration tests for structured exit codes.
//!
//! These tests verify that chainprofile returns the documented exit code
//! for each failure category, enabling reliable shell scripting.

mod common;

use common::{STANDARD_DEFINITIONS, chainprofile_cmd, chainprofile_cmd_with_config, write_definitions};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_success_returns_exit_code_0() {
    let dir = TempDir::new().unwrap();
    let path = write_definitions(dir.path(), "chainprofile.json", STANDARD_DEFINITIONS);

    chainprofile_cmd_with_config(&path)
        .arg("resolve")
        .assert()
        .code(0);
}

#[test]
fn test_missing_placeholder_variable_returns_exit_code_2() {
    let dir = TempDir::new().unwrap();
    let path = write_definitions(dir.path(), "chainprofile.json", STANDARD_DEFINITIONS);

    chainprofile_cmd_with_config(&path)
        .env("INFURA_PROJECT_ID", "abc123")
        .args(["resolve", "sepolia"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("MNEMONIC"));
}

#[test]
fn test_unknown_profile_returns_exit_code_4() {
    let dir = TempDir::new().unwrap();
    let path = write_definitions(dir.path(), "chainprofile.json", STANDARD_DEFINITIONS);

    chainprofile_cmd_with_config(&path)
        .args(["resolve", "nonexistent"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("nonexistent"));
}

#[test]
fn test_invalid_port_returns_exit_code_5() {
    let dir = TempDir::new().unwrap();
    let path = write_definitions(
        dir.path(),
        "chainprofile.json",
        r#"{
            "networks": { "broken": { "host": "127.0.0.1", "port": 99999, "network_id": "*" } },
            "compilers": { "solc": { "version": "0.8.22" } }
        }"#,
    );

    chainprofile_cmd_with_config(&path)
        .args(["resolve", "broken"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("port"));
}

#[test]
fn test_unparsable_override_returns_exit_code_5() {
    let dir = TempDir::new().unwrap();
    let path = write_definitions(dir.path(), "chainprofile.json", STANDARD_DEFINITIONS);

    chainprofile_cmd_with_config(&path)
        .env("CHAINPROFILE_DEVELOPMENT_PORT", "eighty")
        .arg("resolve")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("CHAINPROFILE_DEVELOPMENT_PORT"));
}

#[test]
fn test_missing_definitions_file_returns_exit_code_1() {
    let dir = TempDir::new().unwrap();

    chainprofile_cmd()
        .current_dir(dir.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("chainprofile.json"));
}

#[test]
fn test_ambiguous_compiler_returns_exit_code_1() {
    let dir = TempDir::new().unwrap();
    let path = write_definitions(
        dir.path(),
        "chainprofile.json",
        r#"{
            "networks": { "development": { "host": "127.0.0.1", "port": 8545, "network_id": "*" } },
            "compilers": { "solc": { "version": "0.8.22" }, "vyper": { "version": "0.3.10" } }
        }"#,
    );

    chainprofile_cmd_with_config(&path)
        .arg("resolve")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("solc, vyper"));

    chainprofile_cmd_with_config(&path)
        .args(["--compiler", "vyper", "resolve"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("vyper 0.3.10"));
}
