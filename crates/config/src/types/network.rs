//! Network identifier type.
//!
//! A profile's `networkId` is either the wildcard `"*"` (match whatever chain
//! the endpoint reports), a numeric chain id, or a free-form name.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of the chain a profile deploys to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NetworkId {
    /// Wildcard: accept any network id reported by the endpoint.
    Any,
    /// Numeric chain id (e.g. `11155111` for Sepolia).
    Id(u64),
    /// Named network id for toolchains that accept symbolic ids.
    Named(String),
}

impl NetworkId {
    /// Returns true for the `"*"` wildcard.
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl FromStr for NetworkId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "*" {
            return Ok(Self::Any);
        }
        Ok(match trimmed.parse::<u64>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Named(trimmed.to_string()),
        })
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Id(id) => write!(f, "{id}"),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl Serialize for NetworkId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Id(id) => serializer.serialize_u64(*id),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> Deserialize<'de> for NetworkId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Id(u64),
            Text(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Id(id) => Self::Id(id),
            Repr::Text(text) => text.parse().unwrap_or_else(|never: Infallible| match never {}),
        })
    }
}
