//! Provider factory types.
//!
//! Responsibilities:
//! - Describe the external transport constructor a remote profile depends on.
//! - Keep constructor arguments (mnemonics, endpoint URLs with project ids)
//!   out of logs and serialized output.
//!
//! Does NOT handle:
//! - Invoking the constructor or opening any connection. The factory is an
//!   opaque reference handed to the deployment subsystem untouched.
//!
//! Invariants:
//! - Argument values are `SecretString`; `Debug` and `Serialize` print only
//!   argument names.

use secrecy::{ExposeSecret, SecretString};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Placeholder printed in place of argument values.
const REDACTED: &str = "[REDACTED]";

/// Provider factory as authored: arguments may contain `${VAR}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawProviderFactory {
    /// Name of the external constructor (e.g. `hdwallet`).
    pub constructor: String,
    /// Named constructor arguments.
    #[serde(default)]
    pub arguments: BTreeMap<String, String>,
}

impl RawProviderFactory {
    pub fn new(constructor: impl Into<String>) -> Self {
        Self {
            constructor: constructor.into(),
            arguments: BTreeMap::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }
}

/// Reference to an external transport constructor with its arguments filled in.
#[derive(Clone)]
pub struct ProviderFactory {
    constructor: String,
    arguments: BTreeMap<String, SecretString>,
}

impl ProviderFactory {
    pub fn new(constructor: impl Into<String>) -> Self {
        Self {
            constructor: constructor.into(),
            arguments: BTreeMap::new(),
        }
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: SecretString) -> Self {
        self.arguments.insert(name.into(), value);
        self
    }

    /// Name of the external constructor.
    pub fn constructor(&self) -> &str {
        &self.constructor
    }

    /// Look up a constructor argument by name.
    pub fn argument(&self, name: &str) -> Option<&SecretString> {
        self.arguments.get(name)
    }

    /// Argument names in sorted order.
    pub fn argument_names(&self) -> impl Iterator<Item = &str> {
        self.arguments.keys().map(String::as_str)
    }
}

impl fmt::Debug for ProviderFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderFactory")
            .field("constructor", &self.constructor)
            .field("arguments", &self.arguments.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl PartialEq for ProviderFactory {
    fn eq(&self, other: &Self) -> bool {
        self.constructor == other.constructor
            && self.arguments.len() == other.arguments.len()
            && self
                .arguments
                .iter()
                .zip(other.arguments.iter())
                .all(|((ka, va), (kb, vb))| ka == kb && va.expose_secret() == vb.expose_secret())
    }
}

impl Serialize for ProviderFactory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        struct Redacted<'a>(&'a BTreeMap<String, SecretString>);

        impl Serialize for Redacted<'_> {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for name in self.0.keys() {
                    map.serialize_entry(name, REDACTED)?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("constructor", &self.constructor)?;
        map.serialize_entry("arguments", &Redacted(&self.arguments))?;
        map.end()
    }
}
