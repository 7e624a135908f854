//! Building a `Profile` from its authored definition.
//!
//! Responsibilities:
//! - Substitute `${VAR}` placeholders in every authored value.
//! - Convert authored scalars into typed profile values.
//!
//! Does NOT handle:
//! - Environment overrides (see env.rs); they are applied afterwards and win.
//! - Range or requiredness checks (see validation.rs).
//!
//! Invariants:
//! - Never fails: conversion problems are recorded on `Profile::issues`.
//! - A field whose value could not be produced is left as `None`.

use secrecy::SecretString;

use super::env::Environment;
use super::value::{boolean, expand, integer, network_id, text};
use crate::types::{
    LoadIssue, Profile, ProfileField, ProviderFactory, RawProfile, RawProviderFactory, ScalarValue,
};

/// Build a profile from its authored definition.
pub(crate) fn build_profile(name: &str, raw: &RawProfile, env: &Environment) -> Profile {
    let mut profile = Profile {
        name: name.to_string(),
        ..Profile::default()
    };
    let mut issues = Vec::new();

    profile.host = convert(ProfileField::Host, raw.host.as_ref(), env, text, &mut issues);
    profile.port = convert(ProfileField::Port, raw.port.as_ref(), env, integer, &mut issues);
    profile.network_id = convert(
        ProfileField::NetworkId,
        raw.network_id.as_ref(),
        env,
        network_id,
        &mut issues,
    );
    profile.gas_limit = convert(
        ProfileField::GasLimit,
        raw.gas_limit.as_ref(),
        env,
        integer,
        &mut issues,
    );
    profile.confirmations = convert(
        ProfileField::Confirmations,
        raw.confirmations.as_ref(),
        env,
        integer,
        &mut issues,
    );
    profile.timeout_blocks = convert(
        ProfileField::TimeoutBlocks,
        raw.timeout_blocks.as_ref(),
        env,
        integer,
        &mut issues,
    );
    profile.skip_dry_run = convert(
        ProfileField::SkipDryRun,
        raw.skip_dry_run.as_ref(),
        env,
        boolean,
        &mut issues,
    );
    profile.provider_factory = raw
        .provider_factory
        .as_ref()
        .and_then(|provider| record(build_provider(provider, env), &mut issues));

    profile.issues = issues;
    profile
}

fn convert<T>(
    field: ProfileField,
    raw: Option<&ScalarValue>,
    env: &Environment,
    f: fn(ProfileField, &ScalarValue, &Environment) -> Result<T, LoadIssue>,
    issues: &mut Vec<LoadIssue>,
) -> Option<T> {
    raw.and_then(|value| record(f(field, value, env), issues))
}

fn record<T>(result: Result<T, LoadIssue>, issues: &mut Vec<LoadIssue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(issue) => {
            issues.push(issue);
            None
        }
    }
}

/// Fill in provider constructor arguments. The constructor itself is not invoked.
fn build_provider(
    raw: &RawProviderFactory,
    env: &Environment,
) -> Result<ProviderFactory, LoadIssue> {
    raw.arguments
        .iter()
        .try_fold(
            ProviderFactory::new(raw.constructor.trim()),
            |factory, (name, template)| {
                let value = expand(ProfileField::ProviderFactory, template, env)?;
                Ok(factory.with_argument(name.clone(), SecretString::new(value.into())))
            },
        )
}
