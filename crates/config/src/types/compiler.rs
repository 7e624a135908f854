//! Compiler pin types.
//!
//! `CompilerSpec` is process-wide: it is built once from the definitions'
//! `compilers.<toolName>.version` entry and combined with every resolved profile.

use semver::Version;
use serde::{Deserialize, Serialize};

/// A `compilers.<toolName>` entry as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCompiler {
    /// Exact compiler version to fetch (e.g. `0.8.22`).
    pub version: Option<String>,
}

/// The compiler tool and exact version applied to every deployment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerSpec {
    tool_name: String,
    version: Version,
}

impl CompilerSpec {
    pub fn new(tool_name: impl Into<String>, version: Version) -> Self {
        Self {
            tool_name: tool_name.into(),
            version,
        }
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }
}
