use serde::{Deserialize, Serialize};

/// Options forwarded to the external test runner (the `mocha` section).
///
/// Carried through as data; nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TestRunnerOptions {
    /// Per-test timeout in milliseconds
    pub timeout: Option<u64>,
    /// Reporter name (e.g. `spec`, `eth-gas-reporter`)
    pub reporter: Option<String>,
    /// Stop after the first failing test
    pub bail: Option<bool>,
    /// Only run tests matching this pattern
    pub grep: Option<String>,
}
