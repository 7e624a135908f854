//! Raw project definitions and the definitions file reader.
//!
//! Responsibilities:
//! - Define `ProjectDefinitions`: networks, compiler pins and test-runner options
//!   exactly as authored.
//! - Read definitions from JSON (default) or YAML (`.yaml`/`.yml`) files.
//! - Preserve the authoring order of networks, including duplicate names, so
//!   that duplicates can be flagged instead of silently collapsed.
//!
//! Does NOT handle:
//! - Placeholder substitution or environment overrides (see `loader`).
//! - Validation of profile fields.
//!
//! Invariants:
//! - Reading is the only I/O in this crate; everything downstream is pure.
//! - Parse errors carry the file path but never file contents.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::{RawCompiler, RawProfile, TestRunnerOptions};

/// Errors reading a definitions file.
#[derive(Error, Debug)]
pub enum DefinitionsFileError {
    #[error("Failed to read definitions file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse definitions file at {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Network definitions in authoring order.
///
/// Duplicate names are kept; `ProfileResolver::load` applies last-write-wins
/// and records a warning for each duplicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawNetworks {
    entries: Vec<(String, RawProfile)>,
}

impl RawNetworks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a definition (builder style).
    pub fn with_profile(mut self, name: impl Into<String>, profile: RawProfile) -> Self {
        self.push(name, profile);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, profile: RawProfile) {
        self.entries.push((name.into(), profile));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawProfile)> {
        self.entries
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, RawProfile)> for RawNetworks {
    fn from_iter<I: IntoIterator<Item = (N, RawProfile)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, profile)| (name.into(), profile))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for RawNetworks {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NetworksVisitor;

        impl<'de> Visitor<'de> for NetworksVisitor {
            type Value = RawNetworks;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of profile name to profile definition")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut networks = RawNetworks::new();
                while let Some((name, profile)) = access.next_entry::<String, RawProfile>()? {
                    networks.push(name, profile);
                }
                Ok(networks)
            }
        }

        deserializer.deserialize_map(NetworksVisitor)
    }
}

/// Everything a definitions file declares.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectDefinitions {
    /// Named deployment profiles.
    pub networks: RawNetworks,
    /// Compiler pins keyed by tool name (e.g. `solc`).
    pub compilers: BTreeMap<String, RawCompiler>,
    /// Test-runner options.
    #[serde(alias = "testRunner")]
    pub mocha: TestRunnerOptions,
}

impl ProjectDefinitions {
    /// Read definitions from disk, choosing the format by file extension.
    pub fn read(path: &Path) -> Result<Self, DefinitionsFileError> {
        let content = std::fs::read_to_string(path).map_err(|e| DefinitionsFileError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let parsed = if is_yaml(path) {
            Self::from_yaml_str(&content).map_err(|e| e.to_string())
        } else {
            Self::from_json_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| DefinitionsFileError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}
