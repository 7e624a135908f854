//! The loaded set of named profiles.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::profile::Profile;

/// Non-fatal problem noticed while loading definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The same profile name was defined more than once; the last definition won.
    DuplicateProfile(String),
    /// A profile with an empty name was skipped.
    EmptyProfileName,
    /// Several profiles map to the same environment override names, so an
    /// override meant for one of them applies to all of them.
    SharedOverrideName { stem: String, profiles: Vec<String> },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateProfile(name) => write!(
                f,
                "profile '{name}' is defined more than once; the last definition is used"
            ),
            Self::EmptyProfileName => f.write_str("skipped a profile with an empty name"),
            Self::SharedOverrideName { stem, profiles } => write!(
                f,
                "profiles '{}' share the override variables {stem}_*; an override applies to all of them",
                profiles.join("', '")
            ),
        }
    }
}

/// Profiles keyed by unique, non-empty name.
///
/// Built once by `ProfileResolver::load` and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileSet {
    profiles: BTreeMap<String, Profile>,
    warnings: Vec<LoadWarning>,
}

impl ProfileSet {
    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Warnings collected during load, in the order they were noticed.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    pub(crate) fn warn(&mut self, warning: LoadWarning) {
        self.warnings.push(warning);
    }

    /// Insert a profile, replacing and flagging any earlier one with the same name.
    pub(crate) fn insert(&mut self, profile: Profile) {
        if profile.name.is_empty() {
            self.warnings.push(LoadWarning::EmptyProfileName);
            return;
        }
        let name = profile.name.clone();
        if self.profiles.insert(name.clone(), profile).is_some() {
            self.warnings.push(LoadWarning::DuplicateProfile(name));
        }
    }
}
