//! Conversion of authored scalars into typed profile values.
//!
//! Every failure is returned as a `LoadIssue` so callers can defer it until
//! the profile is requested.

use super::env::Environment;
use super::placeholder::{PlaceholderError, substitute};
use crate::types::{LoadIssue, NetworkId, ProfileField, ScalarValue};

fn invalid(field: ProfileField, origin: &str, message: impl Into<String>) -> LoadIssue {
    LoadIssue::InvalidValue {
        field,
        origin: origin.to_string(),
        message: message.into(),
    }
}

/// Substitute placeholders in a text value.
pub(super) fn expand(
    field: ProfileField,
    template: &str,
    env: &Environment,
) -> Result<String, LoadIssue> {
    substitute(template, env).map_err(|e| match e {
        PlaceholderError::Missing(var) => LoadIssue::MissingVariable { field, var },
        malformed => invalid(field, field.key(), malformed.to_string()),
    })
}

/// Resolve a scalar to text, substituting placeholders.
pub(super) fn text(
    field: ProfileField,
    raw: &ScalarValue,
    env: &Environment,
) -> Result<String, LoadIssue> {
    match raw {
        ScalarValue::Text(template) => expand(field, template, env),
        ScalarValue::Integer(value) => Ok(value.to_string()),
        ScalarValue::Bool(value) => Ok(value.to_string()),
        ScalarValue::Unsupported(_) => Err(invalid(field, field.key(), "must be a string")),
    }
}

pub(super) fn integer(
    field: ProfileField,
    raw: &ScalarValue,
    env: &Environment,
) -> Result<i64, LoadIssue> {
    match raw {
        ScalarValue::Integer(value) => Ok(*value),
        ScalarValue::Text(template) => {
            let value = expand(field, template, env)?;
            parse_integer(field, field.key(), &value)
        }
        ScalarValue::Bool(_) | ScalarValue::Unsupported(_) => {
            Err(invalid(field, field.key(), "must be an integer"))
        }
    }
}

pub(super) fn boolean(
    field: ProfileField,
    raw: &ScalarValue,
    env: &Environment,
) -> Result<bool, LoadIssue> {
    match raw {
        ScalarValue::Bool(value) => Ok(*value),
        ScalarValue::Text(template) => {
            let value = expand(field, template, env)?;
            parse_bool(field, field.key(), &value)
        }
        ScalarValue::Integer(_) | ScalarValue::Unsupported(_) => {
            Err(invalid(field, field.key(), "must be true or false"))
        }
    }
}

pub(super) fn network_id(
    field: ProfileField,
    raw: &ScalarValue,
    env: &Environment,
) -> Result<NetworkId, LoadIssue> {
    match raw {
        ScalarValue::Integer(value) => u64::try_from(*value)
            .map(NetworkId::Id)
            .map_err(|_| invalid(field, field.key(), "must not be negative")),
        ScalarValue::Text(template) => {
            let value = expand(field, template, env)?;
            parse_network_id(field, field.key(), &value)
        }
        ScalarValue::Bool(_) | ScalarValue::Unsupported(_) => Err(invalid(
            field,
            field.key(),
            "must be \"*\", a chain id, or a network name",
        )),
    }
}

/// Parse an integer from text; `origin` names where the text came from.
pub(super) fn parse_integer(
    field: ProfileField,
    origin: &str,
    value: &str,
) -> Result<i64, LoadIssue> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(field, origin, "must be an integer"))
}

pub(super) fn parse_bool(field: ProfileField, origin: &str, value: &str) -> Result<bool, LoadIssue> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(field, origin, "must be true or false"))
}

pub(super) fn parse_network_id(
    field: ProfileField,
    origin: &str,
    value: &str,
) -> Result<NetworkId, LoadIssue> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, origin, "must not be empty"));
    }
    if trimmed
        .strip_prefix('-')
        .is_some_and(|digits| digits.parse::<u64>().is_ok())
    {
        return Err(invalid(field, origin, "must not be negative"));
    }
    trimmed
        .parse()
        .map_err(|never: std::convert::Infallible| match never {})
}
